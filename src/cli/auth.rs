//! Auth command - show and set up the signed-in user

use crate::cli::style::{Stylize, check};
use anstream::println;
use estate_lister::auth::get_user_auth;
use estate_lister::config::Config;
use estate_lister::error::Result;

/// Run the auth test command
pub fn run_auth_test(config: &Config) -> Result<()> {
    let auth = get_user_auth(config)?;
    println!("{} Signed in as: {}", check(), auth.user_id.accent());
    println!("  {} {:?}", "User id source:".muted(), auth.source);
    println!("  {} {}", "Listing service:".muted(), config.api_base_url);
    Ok(())
}

/// Run the auth setup command (show instructions)
pub fn run_auth_setup() {
    println!("{}", "Listing Authentication Setup".emphasis());
    println!();
    println!("{}", "Option 1: Environment variable".emphasis());
    println!("  export {}=<your-user-id>", "LISTER_USER_ID".accent());
    println!();
    println!("{}", "Option 2: Config file".emphasis());
    match Config::default_path() {
        Some(path) => println!("  Add to {}:", path.display().to_string().accent()),
        None => println!("  Add to your config file (pass it with --config):"),
    }
    println!("  {}", "user_id = \"<your-user-id>\"".accent());
    println!();
    println!("{}", "Other settings:".muted());
    println!("  {}", "LISTER_API_URL, LISTER_UPLOAD_URL, LISTER_UPLOAD_PRESET".muted());
}
