use mailtrap::models::mail::{Address, Attachment, Disposition, Mail};

pub fn main() -> mailtrap::Result<()> {
    // Configure env_logger to see Mailtrap client logs.
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("mailtrap")).init();

    // Setting MAILTRAP_INBOX_ID sends into that sandbox inbox instead of real recipients.
    let client = mailtrap::ClientConfig::from_env()?.to_client()?;
    println!("Sending to {}", client.api_send_url());

    let mail = Mail::builder(
        Address::new("hello@example.com").with_name("Mailtrap Test"),
        vec![Address::new("your@email.com")],
        "You are awesome!",
    )
    .text("Congrats for sending test email with Mailtrap!")
    .html("<p>Congrats for sending test email with <b>Mailtrap</b>!</p>")
    .category("Integration Test")
    .attachments(vec![Attachment::from_bytes("Hello from Rust", "hello.txt")
        .disposition(Disposition::Attachment)
        .mimetype("text/plain")])
    .build()?;

    let response = client.send(&mail)?;
    println!("Sent: {:?}", response.message_ids);

    Ok(())
}
