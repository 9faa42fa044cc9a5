use crate::constants::CONTRIBUTE_ENDPOINT;
use common::{ContributeResponse, FileRef, FormValues};
use form::{SubmitError, Transport};
use log::info;
use reqwest::blocking::{multipart, Client};

/// Sends contributions to the server as multipart/form-data.
pub struct HttpTransport {
    server: String,
    client: Client,
}

impl HttpTransport {
    /// Create a transport for the given server base URL
    pub fn new(server: String) -> Self {
        Self {
            server,
            client: Client::new(),
        }
    }
}

impl Transport for HttpTransport {
    fn submit(&self, values: &FormValues) -> Result<ContributeResponse, SubmitError> {
        let form = build_form(values)?;

        let url = format!("{}{}", self.server, CONTRIBUTE_ENDPOINT);
        info!("POST {}", url);

        let response = self
            .client
            .post(&url)
            .multipart(form)
            .send()
            .map_err(|e| SubmitError::Connect(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SubmitError::Status {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json::<ContributeResponse>()
            .map_err(|e| SubmitError::Decode(e.to_string()))
    }
}

/// Build the multipart form: one text part per scalar field, file parts for
/// selected uploads, text parts for server-side references.
fn build_form(values: &FormValues) -> Result<multipart::Form, SubmitError> {
    let mut form = multipart::Form::new()
        .text("name", values.name.clone())
        .text("email", values.email.clone())
        .text("age", values.age.clone())
        .text("location", values.location.clone())
        .text("topic", values.topic.clone())
        .text("description", values.description.clone())
        .text("category", values.category.clone());

    form = attach_file(form, "audiofile", &values.audiofile)?;
    form = attach_file(form, "thumbnail", &values.thumbnail)?;

    Ok(form)
}

fn attach_file(
    form: multipart::Form,
    field: &str,
    file: &FileRef,
) -> Result<multipart::Form, SubmitError> {
    match file {
        // An empty optional field is simply omitted
        FileRef::Empty => Ok(form),
        FileRef::Remote(reference) => Ok(form.text(field.to_string(), reference.clone())),
        FileRef::Uploaded(file) => {
            let part = multipart::Part::bytes(file.bytes.clone())
                .file_name(file.filename.clone())
                .mime_str(&file.mime)
                .map_err(|e| SubmitError::Encode(e.to_string()))?;
            Ok(form.part(field.to_string(), part))
        }
    }
}
