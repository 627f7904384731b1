//! Validate a registration form's fields and print the outcome.
//!
//! Run with: cargo run -p veform --example register_check

use anyhow::Result;
use veform::{check_email, check_password, check_username, FieldCheck};

fn report(field: &str, value: &str, check: &FieldCheck) {
    match &check.error {
        None => println!("{:<10} {:<24} ok", field, value),
        Some(error) => println!("{:<10} {:<24} {}", field, value, error),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_target(false).init();

    let submissions = [
        ("holybyte", "user@example.com", "Str0ng!Pass"),
        ("ab", "not-an-email", "alllowercase"),
    ];

    for (username, email, password) in submissions {
        let (u, e, p) = tokio::join!(
            check_username(username),
            check_email(email),
            check_password(password),
        );
        report("username", username, &u);
        report("email", email, &e);
        report("password", password, &p);
        println!();
    }

    Ok(())
}
