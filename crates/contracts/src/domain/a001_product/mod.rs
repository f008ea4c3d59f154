pub mod aggregate;
pub mod request;

pub use aggregate::{classify_stock, NewProduct, Product, ProductId, ProductStatus, LOW_STOCK_LIMIT};
pub use request::{NewProductDto, UpdateStockDto};
