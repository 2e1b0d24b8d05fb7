use crate::common::*;

#[doc = r#"
    Reads a TOML configuration file and deserializes it into the given
    structure type.

    1. Read the file at the given path into a string
    2. Parse the TOML text into the generic type `T` via serde

    # Type Parameters
    * `T` - structure type implementing `DeserializeOwned`

    # Arguments
    * `file_path` - path of the TOML file to read

    # Returns
    * `Result<T, anyhow::Error>` - parsed structure on success

    # Errors
    - The file does not exist or cannot be read
    - The TOML text is malformed or does not match the structure's fields
"#]
pub fn read_toml_from_file<T: DeserializeOwned>(file_path: &str) -> Result<T, anyhow::Error> {
    let toml_content = std::fs::read_to_string(file_path)?;
    let toml: T = toml::from_str(&toml_content)?;

    Ok(toml)
}

#[doc = r#"
    Reduces a client-supplied filename to a safe final path component.

    Uploaded filenames are attacker-controlled; anything resembling a path
    (`../../etc/passwd`, `C:\data\x.xlsx`) is cut down to its last segment
    before the file is stored under the upload directory.

    # Arguments
    * `raw` - filename exactly as submitted by the client

    # Returns
    * `String` - bare filename; empty when nothing usable remains
"#]
pub fn sanitize_filename(raw: &str) -> String {
    let name: &str = raw
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    match name {
        "" | "." | ".." => String::new(),
        _ => name.to_string(),
    }
}
