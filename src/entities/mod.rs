//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod attendance;
pub mod contact_message;
pub mod employee;
pub mod inventory_item;
pub mod menu;
pub mod order;
pub mod review;
pub mod stock_update;
pub mod user;

// Re-export specific types to avoid conflicts
pub use attendance::{Column as AttendanceColumn, Entity as Attendance, Model as AttendanceModel};
pub use contact_message::{
    Column as ContactMessageColumn, Entity as ContactMessage, Model as ContactMessageModel,
};
pub use employee::{Column as EmployeeColumn, Entity as Employee, Model as EmployeeModel};
pub use inventory_item::{
    Column as InventoryItemColumn, Entity as InventoryItem, Model as InventoryItemModel,
};
pub use menu::{Column as MenuColumn, Entity as Menu, Model as MenuModel};
pub use order::{Column as OrderColumn, Entity as Order, Model as OrderModel};
pub use review::{Column as ReviewColumn, Entity as Review, Model as ReviewModel};
pub use stock_update::{
    Column as StockUpdateColumn, Entity as StockUpdate, Model as StockUpdateModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
