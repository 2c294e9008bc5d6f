//! Interactive OAuth2 PKCE authorization.
//!
//! Run with: MAL_CLIENT_ID=... MAL_CLIENT_SECRET=... cargo run --example oauth_flow
//!
//! Prints the authorization URL, reads the `code` from the redirect on
//! stdin, and prints the resulting tokens.

use std::io::{self, BufRead, Write};

use malkit::ClientBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let client = ClientBuilder::from_env().build()?;

    let request = client.auth().generate_auth_url_with_state()?;
    println!("Open this URL in a browser and approve access:\n\n{}\n", request.url);

    print!("Paste the `code` parameter from the redirect: ");
    io::stdout().flush()?;
    let mut code = String::new();
    io::stdin().lock().read_line(&mut code)?;

    let tokens = client.auth().exchange(code.trim(), &request.code_verifier).await?;
    println!("access_token:  {}", tokens.access_token);
    println!("refresh_token: {}", tokens.refresh_token);

    let user = client.with_access_token(tokens.access_token);
    let me = user.users().me().await?;
    println!("Authorized as {}", me.name);
    Ok(())
}
