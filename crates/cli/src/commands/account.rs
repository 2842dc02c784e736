//! Sign-in commands.

use secrecy::SecretString;

use atelier_storefront::{AppError, Storefront};

use super::CommandError;

/// Sign in.
///
/// # Errors
///
/// Returns `AppError::Auth` if sign-in fails.
#[allow(clippy::print_stdout)]
pub async fn login(
    storefront: &mut Storefront,
    email: &str,
    password: String,
) -> Result<(), CommandError> {
    let password = SecretString::from(password);
    let user = storefront
        .auth_mut()
        .login(email, &password)
        .await
        .map_err(AppError::from)?;

    println!("Signed in as {}", user.display_name());
    Ok(())
}

/// Create an account and sign in.
///
/// # Errors
///
/// Returns `AppError::Auth` if signup fails.
#[allow(clippy::print_stdout)]
pub async fn signup(
    storefront: &mut Storefront,
    email: &str,
    password: String,
    name: Option<&str>,
) -> Result<(), CommandError> {
    let password = SecretString::from(password);
    let user = storefront
        .auth_mut()
        .signup(email, &password, name)
        .await
        .map_err(AppError::from)?;

    println!("Welcome, {}", user.display_name());
    Ok(())
}

/// Sign out.
#[allow(clippy::print_stdout)]
pub fn logout(storefront: &mut Storefront) {
    storefront.auth_mut().logout();
    println!("Signed out");
}

/// Show the signed-in user.
#[allow(clippy::print_stdout)]
pub fn whoami(storefront: &Storefront) {
    match storefront.auth().user() {
        Some(user) => println!("{} <{}> ({})", user.display_name(), user.email, user.id),
        None => println!("Not signed in"),
    }
}
