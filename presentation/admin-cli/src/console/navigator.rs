use business::domain::auth::navigator::Navigator;

/// Points the operator back at the login command.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn to_login(&self) {
        println!("Signed out. Run `inventory-admin login --email <EMAIL> --password <PASSWORD>` to sign in.");
    }
}
