use chrono::NaiveDate;
use contracts::domain::a001_product::{NewProduct, Product, ProductId};
use contracts::domain::a002_sales_record::SalesRecord;
use contracts::domain::a003_category::CategoryAggregate;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::a002_sales_record::feed;
use crate::shared::error::{AppError, AppResult};
use crate::shared::random::RandomSource;
use crate::usecases::u501_generate_sample_data::SampleData;

/// In-memory state of the dashboard, shared by the HTTP handlers and the
/// live feed task for the whole life of the process.
///
/// Every operation holds the lock for its full duration, so readers never see
/// a half-applied tick or a product whose status disagrees with its stock.
pub struct DashboardStore {
    inner: RwLock<StoreState>,
}

struct StoreState {
    products: Vec<Product>,
    sales: Vec<SalesRecord>,
    categories: Vec<CategoryAggregate>,
    next_product_seq: u64,
}

impl DashboardStore {
    pub fn new(data: SampleData) -> Self {
        let next_product_seq = data
            .products
            .iter()
            .filter_map(|p| p.id.as_str().parse::<u64>().ok())
            .max()
            .unwrap_or(0)
            + 1;

        Self {
            inner: RwLock::new(StoreState {
                products: data.products,
                sales: data.sales,
                categories: data.categories,
                next_product_seq,
            }),
        }
    }

    // A panic while holding the lock cannot leave the state half-written
    // (each mutation is a single push/assign), so poisoning is ignored.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn list_products(&self) -> Vec<Product> {
        self.read().products.clone()
    }

    pub fn list_sales(&self) -> Vec<SalesRecord> {
        self.read().sales.clone()
    }

    pub fn list_categories(&self) -> Vec<CategoryAggregate> {
        self.read().categories.clone()
    }

    pub fn get_product(&self, id: &str) -> Option<Product> {
        self.read()
            .products
            .iter()
            .find(|p| p.id.as_str() == id)
            .cloned()
    }

    /// Runs `f` against consistent views of products and sales.
    pub fn with_snapshot<R>(&self, f: impl FnOnce(&[Product], &[SalesRecord]) -> R) -> R {
        let state = self.read();
        f(&state.products, &state.sales)
    }

    /// Stores a new product under the next sequential id.
    pub fn add_product(&self, fields: NewProduct) -> Product {
        let mut state = self.write();
        let id = ProductId::from_sequence(state.next_product_seq);
        state.next_product_seq += 1;

        let product = Product::new(id, fields);
        state.products.push(product.clone());
        product
    }

    /// Sets the stock level; the status is recomputed in the same write.
    pub fn set_product_stock(&self, id: &str, stock: u32) -> AppResult<Product> {
        let mut state = self.write();
        let product = state
            .products
            .iter_mut()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| AppError::NotFound(id.to_string()))?;

        product.set_stock(stock);
        Ok(product.clone())
    }

    /// Appends one simulated sales record and trims the window, atomically.
    pub fn apply_feed_tick(
        &self,
        rng: &mut dyn RandomSource,
        today: NaiveDate,
        window: usize,
    ) -> AppResult<SalesRecord> {
        let mut state = self.write();
        feed::append_tick(&mut state.sales, rng, today, window)
    }

    #[cfg(test)]
    pub fn from_parts(
        products: Vec<Product>,
        sales: Vec<SalesRecord>,
        categories: Vec<CategoryAggregate>,
    ) -> Self {
        Self::new(SampleData {
            products,
            sales,
            categories,
        })
    }
}
