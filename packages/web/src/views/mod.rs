mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod accounts;
pub use accounts::Accounts;

mod admin_users;
pub use admin_users::AdminUsers;
