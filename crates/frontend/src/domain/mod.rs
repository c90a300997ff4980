pub mod a001_category;
pub mod a002_product;
pub mod a003_branch;
pub mod a004_distributor;
pub mod a005_customer;
pub mod a006_user;
pub mod a007_role;
