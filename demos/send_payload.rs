//! Prints the request body for a message built from environment defaults

use anyhow::Result;
use clap::Parser;
use sendgrid_mail::{
    domain::mail::{Address, Content, Substitution},
    infrastructure::config::MessageDefaultsConfig,
};

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// Message defaults
    #[clap(flatten)]
    pub defaults: MessageDefaultsConfig,

    /// Recipients, each receiving a separate email
    #[clap(long = "to", required = true)]
    pub to: Vec<String>,

    /// The subject
    #[clap(long, default_value = "Hello -name-")]
    pub subject: String,
}

#[mutants::skip]
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let mut message = args.defaults.message()?;
    message
        .set_subject(&args.subject)
        .add_content([
            Content::plain_text("Hello -name-"),
            Content::html("<strong>Hello -name-</strong>"),
        ]);

    for (index, to) in args.to.iter().enumerate() {
        message
            .personalization_at(index)
            .add_to([Address::parse(to, None)?])
            .add_substitutions([Substitution::new("-name-", to.as_str())]);
    }

    println!("{}", serde_json::to_string_pretty(&message.to_json()?)?);

    Ok(())
}
