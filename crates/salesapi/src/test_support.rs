use crate::{
    abstract_trait::{
        customer::repository::{CustomerCommandRepositoryTrait, CustomerQueryRepositoryTrait},
        product::repository::{ProductCommandRepositoryTrait, ProductQueryRepositoryTrait},
        sale::repository::{SaleCommandRepositoryTrait, SaleQueryRepositoryTrait},
    },
    di::Repositories,
    domain::requests::{
        customer::{CreateCustomerRequest, CustomerSortBy, UpdateCustomerRequest},
        pagination::PageRequest,
        product::{CreateProductRequest, ProductSortBy, UpdateProductRequest},
        sale::{CreateSaleRequest, SaleSortBy, UpdateSaleRequest},
    },
    model::{customer::Customer, product::Product, sale::SaleDetail},
};
use async_trait::async_trait;
use chrono::{DateTime, Duration, TimeZone, Utc};
use rust_decimal::Decimal;
use shared::errors::RepositoryError;
use std::{
    cmp::Ordering,
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

#[derive(Debug, Clone)]
struct SaleRow {
    sale_id: i32,
    sale_date: DateTime<Utc>,
    quantity: i32,
    customer_id: i32,
    product_id: i32,
}

#[derive(Default)]
struct Tables {
    products: BTreeMap<i32, Product>,
    customers: BTreeMap<i32, Customer>,
    sales: BTreeMap<i32, SaleRow>,
    last_id: i32,
}

impl Tables {
    fn next_id(&mut self) -> i32 {
        self.last_id += 1;
        self.last_id
    }

    fn detail(&self, row: &SaleRow) -> SaleDetail {
        let customer = self.customers.get(&row.customer_id);
        let product = self.products.get(&row.product_id);

        SaleDetail {
            sale_id: row.sale_id,
            sale_date: row.sale_date,
            quantity: row.quantity,
            customer_id: row.customer_id,
            product_id: row.product_id,
            customer_name: customer.map(|c| c.full_name.clone()),
            product_name: product.map(|p| p.product_name.clone()),
            price: product.map(|p| p.price),
        }
    }

    fn check_references(&self, customer_id: i32, product_id: i32) -> Result<(), RepositoryError> {
        if !self.customers.contains_key(&customer_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "sales_customer_id_fkey: customer {customer_id} does not exist"
            )));
        }
        if !self.products.contains_key(&product_id) {
            return Err(RepositoryError::ForeignKey(format!(
                "sales_product_id_fkey: product {product_id} does not exist"
            )));
        }
        Ok(())
    }
}

/// In-memory stand-in for Postgres with the same paging, join and
/// referential rules as the SQL repositories.
#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn repositories(self: &Arc<Self>) -> Repositories {
        Repositories {
            product_query: self.clone(),
            product_command: self.clone(),
            customer_query: self.clone(),
            customer_command: self.clone(),
            sale_query: self.clone(),
            sale_command: self.clone(),
        }
    }

    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().unwrap()
    }

    pub fn seed_product(&self, name: &str, price: Decimal) -> Product {
        let mut tables = self.tables();
        let product = Product {
            product_id: tables.next_id(),
            product_name: name.to_string(),
            price,
        };
        tables.products.insert(product.product_id, product.clone());
        product
    }

    pub fn seed_customer(&self, name: &str, email: &str) -> Customer {
        let mut tables = self.tables();
        let customer = Customer {
            customer_id: tables.next_id(),
            full_name: name.to_string(),
            email: email.to_string(),
        };
        tables.customers.insert(customer.customer_id, customer.clone());
        customer
    }

    /// Sale dates step one day per sale so date ordering is predictable.
    pub fn seed_sale(&self, customer_id: i32, product_id: i32, quantity: i32) -> i32 {
        let mut tables = self.tables();
        let sale_id = tables.next_id();
        let sale_date = base_date() + Duration::days(i64::from(sale_id));
        tables.sales.insert(
            sale_id,
            SaleRow {
                sale_id,
                sale_date,
                quantity,
                customer_id,
                product_id,
            },
        );
        sale_id
    }
}

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap()
}

fn paginate<T, S>(
    mut rows: Vec<T>,
    page: &PageRequest<S>,
    compare: impl Fn(&T, &T) -> Ordering,
) -> (Vec<T>, i64) {
    rows.sort_by(|a, b| {
        let ordering = compare(a, b);
        if page.ascending {
            ordering
        } else {
            ordering.reverse()
        }
    });

    let total = rows.len() as i64;
    let page_rows = rows
        .into_iter()
        .skip(page.offset() as usize)
        .take(page.limit() as usize)
        .collect();

    (page_rows, total)
}

#[async_trait]
impl ProductQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        page: &PageRequest<ProductSortBy>,
    ) -> Result<(Vec<Product>, i64), RepositoryError> {
        let rows: Vec<Product> = self.tables().products.values().cloned().collect();

        Ok(paginate(rows, page, |a: &Product, b: &Product| {
            let primary = match page.sort {
                ProductSortBy::ProductId => Ordering::Equal,
                ProductSortBy::ProductName => a.product_name.cmp(&b.product_name),
                ProductSortBy::Price => a.price.cmp(&b.price),
            };
            primary.then(a.product_id.cmp(&b.product_id))
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Product>, RepositoryError> {
        Ok(self.tables().products.get(&id).cloned())
    }
}

#[async_trait]
impl ProductCommandRepositoryTrait for MemoryStore {
    async fn create_product(&self, req: &CreateProductRequest) -> Result<Product, RepositoryError> {
        Ok(self.seed_product(&req.product_name, req.price))
    }

    async fn update_product(&self, req: &UpdateProductRequest) -> Result<Product, RepositoryError> {
        let mut tables = self.tables();
        let product = tables
            .products
            .get_mut(&req.product_id)
            .ok_or(RepositoryError::NotFound)?;

        product.product_name = req.product_name.clone();
        product.price = req.price;
        Ok(product.clone())
    }

    async fn delete_product(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables();
        if !tables.products.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.sales.values().any(|s| s.product_id == id) {
            return Err(RepositoryError::Conflict(format!(
                "product {id} is referenced by existing sales"
            )));
        }
        tables.products.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl CustomerQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        page: &PageRequest<CustomerSortBy>,
    ) -> Result<(Vec<Customer>, i64), RepositoryError> {
        let rows: Vec<Customer> = self.tables().customers.values().cloned().collect();

        Ok(paginate(rows, page, |a: &Customer, b: &Customer| {
            let primary = match page.sort {
                CustomerSortBy::CustomerId => Ordering::Equal,
                CustomerSortBy::FullName => a.full_name.cmp(&b.full_name),
                CustomerSortBy::Email => a.email.cmp(&b.email),
            };
            primary.then(a.customer_id.cmp(&b.customer_id))
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Customer>, RepositoryError> {
        Ok(self.tables().customers.get(&id).cloned())
    }
}

#[async_trait]
impl CustomerCommandRepositoryTrait for MemoryStore {
    async fn create_customer(
        &self,
        req: &CreateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        Ok(self.seed_customer(&req.full_name, &req.email))
    }

    async fn update_customer(
        &self,
        req: &UpdateCustomerRequest,
    ) -> Result<Customer, RepositoryError> {
        let mut tables = self.tables();
        let customer = tables
            .customers
            .get_mut(&req.customer_id)
            .ok_or(RepositoryError::NotFound)?;

        customer.full_name = req.full_name.clone();
        customer.email = req.email.clone();
        Ok(customer.clone())
    }

    async fn delete_customer(&self, id: i32) -> Result<(), RepositoryError> {
        let mut tables = self.tables();
        if !tables.customers.contains_key(&id) {
            return Err(RepositoryError::NotFound);
        }
        if tables.sales.values().any(|s| s.customer_id == id) {
            return Err(RepositoryError::Conflict(format!(
                "customer {id} is referenced by existing sales"
            )));
        }
        tables.customers.remove(&id);
        Ok(())
    }
}

fn line_total(sale: &SaleDetail) -> Option<Decimal> {
    sale.price.map(|price| Decimal::from(sale.quantity) * price)
}

#[async_trait]
impl SaleQueryRepositoryTrait for MemoryStore {
    async fn find_all(
        &self,
        page: &PageRequest<SaleSortBy>,
    ) -> Result<(Vec<SaleDetail>, i64), RepositoryError> {
        let rows: Vec<SaleDetail> = {
            let tables = self.tables();
            tables.sales.values().map(|row| tables.detail(row)).collect()
        };

        Ok(paginate(rows, page, |a: &SaleDetail, b: &SaleDetail| {
            let primary = match page.sort {
                SaleSortBy::SaleId => Ordering::Equal,
                SaleSortBy::SaleDate => a.sale_date.cmp(&b.sale_date),
                SaleSortBy::CustomerName => a.customer_name.cmp(&b.customer_name),
                SaleSortBy::ProductName => a.product_name.cmp(&b.product_name),
                SaleSortBy::Quantity => a.quantity.cmp(&b.quantity),
                SaleSortBy::TotalPrice => line_total(a).cmp(&line_total(b)),
            };
            primary.then(a.sale_id.cmp(&b.sale_id))
        }))
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<SaleDetail>, RepositoryError> {
        let tables = self.tables();
        Ok(tables.sales.get(&id).map(|row| tables.detail(row)))
    }

    async fn total_revenue(&self) -> Result<Decimal, RepositoryError> {
        let tables = self.tables();
        Ok(tables
            .sales
            .values()
            .filter_map(|row| line_total(&tables.detail(row)))
            .sum())
    }
}

#[async_trait]
impl SaleCommandRepositoryTrait for MemoryStore {
    async fn create_sale(&self, req: &CreateSaleRequest) -> Result<SaleDetail, RepositoryError> {
        self.tables()
            .check_references(req.customer_id, req.product_id)?;

        let sale_id = self.seed_sale(req.customer_id, req.product_id, req.quantity);
        let tables = self.tables();
        Ok(tables.detail(&tables.sales[&sale_id]))
    }

    async fn update_sale(&self, req: &UpdateSaleRequest) -> Result<SaleDetail, RepositoryError> {
        let mut tables = self.tables();
        if !tables.sales.contains_key(&req.sale_id) {
            return Err(RepositoryError::NotFound);
        }
        tables.check_references(req.customer_id, req.product_id)?;

        let row = tables
            .sales
            .get_mut(&req.sale_id)
            .ok_or(RepositoryError::NotFound)?;
        row.quantity = req.quantity;
        row.customer_id = req.customer_id;
        row.product_id = req.product_id;
        let row = row.clone();

        Ok(tables.detail(&row))
    }

    async fn delete_sale(&self, id: i32) -> Result<(), RepositoryError> {
        self.tables()
            .sales
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
