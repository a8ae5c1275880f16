use crate::{
    abstract_trait::{
        customer::{
            repository::{DynCustomerCommandRepository, DynCustomerQueryRepository},
            service::{DynCustomerCommandService, DynCustomerQueryService},
        },
        product::{
            repository::{DynProductCommandRepository, DynProductQueryRepository},
            service::{DynProductCommandService, DynProductQueryService},
        },
        sale::{
            repository::{DynSaleCommandRepository, DynSaleQueryRepository},
            service::{DynSaleCommandService, DynSaleQueryService},
        },
    },
    repository::{
        CustomerCommandRepository, CustomerQueryRepository, ProductCommandRepository,
        ProductQueryRepository, SaleCommandRepository, SaleQueryRepository,
    },
    service::{
        CustomerCommandService, CustomerQueryService, ProductCommandService,
        ProductQueryService, SaleCommandService, SaleQueryService,
    },
};
use prometheus_client::registry::Registry;
use shared::config::ConnectionPool;
use std::sync::Arc;

/// Store access behind the repository traits.
#[derive(Clone)]
pub struct Repositories {
    pub product_query: DynProductQueryRepository,
    pub product_command: DynProductCommandRepository,
    pub customer_query: DynCustomerQueryRepository,
    pub customer_command: DynCustomerCommandRepository,
    pub sale_query: DynSaleQueryRepository,
    pub sale_command: DynSaleCommandRepository,
}

impl Repositories {
    pub fn postgres(pool: &ConnectionPool) -> Self {
        Self {
            product_query: Arc::new(ProductQueryRepository::new(pool.clone())),
            product_command: Arc::new(ProductCommandRepository::new(pool.clone())),
            customer_query: Arc::new(CustomerQueryRepository::new(pool.clone())),
            customer_command: Arc::new(CustomerCommandRepository::new(pool.clone())),
            sale_query: Arc::new(SaleQueryRepository::new(pool.clone())),
            sale_command: Arc::new(SaleCommandRepository::new(pool.clone())),
        }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub product_query: DynProductQueryService,
    pub product_command: DynProductCommandService,
    pub customer_query: DynCustomerQueryService,
    pub customer_command: DynCustomerCommandService,
    pub sale_query: DynSaleQueryService,
    pub sale_command: DynSaleCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("product_query", &"DynProductQueryService")
            .field("product_command", &"DynProductCommandService")
            .field("customer_query", &"DynCustomerQueryService")
            .field("customer_command", &"DynCustomerCommandService")
            .field("sale_query", &"DynSaleQueryService")
            .field("sale_command", &"DynSaleCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(repos: Repositories, registry: &mut Registry) -> Self {
        let product_query: DynProductQueryService =
            Arc::new(ProductQueryService::new(repos.product_query, registry));
        let product_command: DynProductCommandService =
            Arc::new(ProductCommandService::new(repos.product_command, registry));

        let customer_query: DynCustomerQueryService =
            Arc::new(CustomerQueryService::new(repos.customer_query, registry));
        let customer_command: DynCustomerCommandService =
            Arc::new(CustomerCommandService::new(repos.customer_command, registry));

        let sale_query: DynSaleQueryService =
            Arc::new(SaleQueryService::new(repos.sale_query, registry));
        let sale_command: DynSaleCommandService =
            Arc::new(SaleCommandService::new(repos.sale_command, registry));

        Self {
            product_query,
            product_command,
            customer_query,
            customer_command,
            sale_query,
            sale_command,
        }
    }
}
