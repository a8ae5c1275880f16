use crate::domain::requests::pagination::{PageRequest, SortKey};
use sqlx::{Postgres, QueryBuilder};

/// Maps a sort column onto the SQL expression it orders by.
pub trait OrderBy: SortKey {
    fn order_expr(&self) -> &'static str;

    /// Primary key column, appended in the same direction so paging is deterministic.
    fn tiebreaker() -> &'static str;
}

/// Appends `ORDER BY .. LIMIT .. OFFSET ..` for `page` to a select statement.
pub fn push_page<S: OrderBy>(builder: &mut QueryBuilder<'_, Postgres>, page: &PageRequest<S>) {
    let direction = if page.ascending { "ASC" } else { "DESC" };
    let expr = page.sort.order_expr();
    let tiebreaker = S::tiebreaker();

    builder.push(format!(" ORDER BY {expr} {direction}"));
    if expr != tiebreaker {
        builder.push(format!(", {tiebreaker} {direction}"));
    }

    builder
        .push(" LIMIT ")
        .push_bind(page.limit())
        .push(" OFFSET ")
        .push_bind(page.offset());
}
