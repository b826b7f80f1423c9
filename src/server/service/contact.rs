use crate::{
    model::contact::{ContactDto, CourseRequestDto},
    server::{
        error::AppError,
        mailer::{Email, Mailer},
    },
};

/// Forwards visitor messages to the site owner.
pub struct ContactService<'a> {
    mailer: &'a dyn Mailer,
    owner_email: &'a str,
}

impl<'a> ContactService<'a> {
    pub fn new(mailer: &'a dyn Mailer, owner_email: &'a str) -> Self {
        Self {
            mailer,
            owner_email,
        }
    }

    /// Mails a contact message.
    ///
    /// # Returns
    /// - `Err(AppError::BadRequest)` - Any field is empty
    pub async fn contact(&self, form: ContactDto) -> Result<(), AppError> {
        require_fields(&[&form.name, &form.email, &form.message])?;

        self.send(
            "Contact from Course Bundler",
            format!(
                "Hello \nI am {} \nMy Email is {} \n{}",
                form.name, form.email, form.message
            ),
        )
        .await
    }

    /// Mails a request for a new course.
    pub async fn course_request(&self, form: CourseRequestDto) -> Result<(), AppError> {
        require_fields(&[&form.name, &form.email, &form.course])?;

        self.send(
            "Request for a course on Course Bundler",
            format!(
                "Hello \nI am {} \nMy Email is {} \n{}",
                form.name, form.email, form.course
            ),
        )
        .await
    }

    async fn send(&self, subject: &str, body: String) -> Result<(), AppError> {
        self.mailer
            .send(Email {
                to: self.owner_email.to_string(),
                subject: subject.to_string(),
                body,
            })
            .await?;

        Ok(())
    }
}

fn require_fields(fields: &[&String]) -> Result<(), AppError> {
    if fields.iter().any(|field| field.trim().is_empty()) {
        return Err(AppError::BadRequest("All fields are mandatory".to_string()));
    }

    Ok(())
}
