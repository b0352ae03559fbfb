pub mod category;
pub mod order;
pub mod product;
pub mod user;

pub use category::Category;
pub use order::{CartItem, NewOrderLine, OrderLine};
pub use product::{Product, ProductForm, ProductInput, ProductListing};
pub use user::{Identity, LoginForm, RegisterForm, User};
