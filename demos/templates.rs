use mailtrap::models::templates::{CreateEmailTemplateParams, UpdateEmailTemplateParams};

pub fn main() -> mailtrap::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::new().default_filter_or("mailtrap")).init();

    let client = mailtrap::ClientConfig::from_env()?.to_client()?;
    let templates = client.email_templates_api()?.templates();

    let template = templates.create(
        &CreateEmailTemplateParams::new("Rust demo", "Hello {{user_name}}", "Demo")
            .with_body_html("<p>Hello {{user_name}}</p>"),
    )?;
    println!("Created template {} with uuid {}", template.name, template.uuid);

    let template = templates.update(
        template.id,
        &UpdateEmailTemplateParams::builder()
            .body_text("Hello {{user_name}}")
            .build()?,
    )?;

    for template in templates.get_list()? {
        println!("{}: {}", template.id, template.subject);
    }

    templates.delete(template.id)?;

    Ok(())
}
