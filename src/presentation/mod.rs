/// Login flow models
pub mod flow;
/// UI container, node and message models shared by self-service flows
pub mod ui;

pub use flow::*;
pub use ui::*;
