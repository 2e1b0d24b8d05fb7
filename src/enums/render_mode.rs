#[doc = r#"
    How the generated dashboard is delivered to the client.

    * `Download` - standalone HTML document saved under the upload directory
      and streamed back as an attachment (the default).
    * `Embed` - script and container fragments rendered into a host page,
      with no dashboard file written.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    #[default]
    Download,
    Embed,
}

impl RenderMode {
    pub fn from_form_value(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "embed" => RenderMode::Embed,
            _ => RenderMode::Download,
        }
    }
}
