#![warn(
    missing_debug_implementations,
    rust_2018_idioms,
    missing_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::missing_crate_level_docs
)]

//! Send a single email through Postmark from the command line

use anyhow::Result;
use clap::Parser;
use postmark_mailer::{
    domain::communication::mailbox::Mailbox,
    infrastructure::email::postmark::{PostmarkConfig, PostmarkMessageBuilder},
};
use tracing::info;

/// Command-line arguments / environment variables
#[derive(Debug, Parser)]
pub struct Args {
    /// The Postmark configuration
    #[clap(flatten)]
    pub postmark: PostmarkConfig,

    /// The sender's email address
    #[clap(long)]
    pub from: String,

    /// The sender's display name
    #[clap(long)]
    pub from_name: Option<String>,

    /// The reply-to email address
    #[clap(long)]
    pub reply_to: Option<String>,

    /// A primary recipient (repeatable)
    #[clap(long, required = true)]
    pub to: Vec<String>,

    /// A carbon-copy recipient (repeatable)
    #[clap(long)]
    pub cc: Vec<String>,

    /// A blind carbon-copy recipient (repeatable)
    #[clap(long)]
    pub bcc: Vec<String>,

    /// The subject
    #[clap(long)]
    pub subject: String,

    /// The plain text body
    #[clap(long)]
    pub text: Option<String>,

    /// The HTML body
    #[clap(long)]
    pub html: Option<String>,

    /// A tag for provider-side tracking (repeatable)
    #[clap(long)]
    pub tag: Vec<String>,
}

#[mutants::skip]
fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let sender = match &args.from_name {
        Some(name) => Mailbox::new(&args.from).with_name(name),
        None => Mailbox::new(&args.from),
    };

    let mut builder = PostmarkMessageBuilder::from_config(&args.postmark);

    builder
        .from(sender)
        .to_all(&args.to)
        .cc_all(&args.cc)
        .bcc_all(&args.bcc)
        .subject(&args.subject)
        .tags(&args.tag);

    if let Some(reply_to) = &args.reply_to {
        builder.reply_to(reply_to);
    }

    if let Some(text) = &args.text {
        builder.text_body(text);
    }

    if let Some(html) = &args.html {
        builder.html_body(html);
    }

    builder.try_send()?;

    info!("message sent to {}", args.to.join(","));

    Ok(())
}
