//! Sign-in command handlers.

use super::Context;
use vitrine::{Credentials, VitrineResult};

/// Sign in and store the token.
pub async fn login(context: &Context, email: String, password: String) -> VitrineResult<()> {
    let user = context
        .client
        .login(&Credentials::new(email, password))
        .await?;
    context.persist().await?;
    println!("Login realizado! Signed in as {} ({})", user.email, user.role);
    Ok(())
}

/// Forget the stored token.
pub async fn logout(context: &Context) -> VitrineResult<()> {
    context.client.logout();
    context.persist().await?;
    println!("Signed out");
    Ok(())
}

/// Show the signed-in user, verified against the backend.
pub async fn whoami(context: &Context) -> VitrineResult<()> {
    if !context.client.session().is_authenticated() {
        println!("Not signed in");
        return Ok(());
    }
    let result = context.client.me().await;
    // A rejected token has already been cleared from the session
    context.persist().await?;
    let user = result?;
    println!("{} <{}> ({})", user.name, user.email, user.role);
    Ok(())
}
