pub mod a001_product;
pub mod a002_sales_record;
pub mod a003_category;
pub mod system;
