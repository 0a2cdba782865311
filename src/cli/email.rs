//! Email demonstration
//!
//! Shows the validated write path on the user model: a malformed address is
//! rejected and reported, a well-formed one is stored and read back.

use crate::error::PrimerResult;
use crate::models::User;

/// Run the validated-email demonstration
pub fn handle_email_command() -> PrimerResult<()> {
    let mut user = User::new("jsmith");

    match user.set_email("jsmith@") {
        Ok(()) => println!("Accepted: jsmith@"),
        Err(err) => println!("Rejected: {}", err),
    }

    user.set_email("jsmith@g.co")?;
    println!(
        "Email for {}: {}",
        user.username,
        user.email().unwrap_or("<unset>")
    );

    Ok(())
}
