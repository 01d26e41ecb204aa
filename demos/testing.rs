use mailtrap::models::{
    inboxes::{CreateInboxParams, UpdateInboxParams},
    messages::ListMessagesParams,
    projects::ProjectParams,
};

pub fn main() -> mailtrap::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("mailtrap")).init();

    let client = mailtrap::ClientConfig::from_env()?.to_client()?;
    let testing = client.testing_api()?;

    let project = testing.projects().create(&ProjectParams::new("Rust demo"))?;
    println!("Created project {} ({})", project.name, project.id);

    let inboxes = testing.inboxes();
    let inbox = inboxes.create(project.id, &CreateInboxParams::new("Rust demo inbox"))?;
    let inbox = inboxes.update(
        inbox.id,
        &UpdateInboxParams::builder().name("Renamed demo inbox").build()?,
    )?;
    println!("Inbox {} receives mail at {}", inbox.name, inbox.email_username);

    let messages = testing
        .messages()
        .get_list(inbox.id, &ListMessagesParams::new().with_page(1))?;
    for message in &messages {
        println!("{} -> {}: {}", message.from_email, message.to_email, message.subject);
        for attachment in testing.attachments().get_list(inbox.id, message.id)? {
            println!("  attachment {}", attachment.filename);
        }
    }

    inboxes.clean(inbox.id)?;
    let deleted = testing.projects().delete(project.id)?;
    println!("Deleted project {}", deleted.id);

    Ok(())
}
