use crate::common::*;

#[doc = r#"
    Reads an environment variable and treats a missing value as a fatal error.

    Every required setting of the application is delivered through environment
    variables, so a missing key means the process cannot run correctly.

    1. Look the key up with `env::var()`
    2. Return the value when present
    3. Otherwise log the failure at error level and panic with the same message

    # Arguments
    * `key` - environment variable key to look up

    # Returns
    * `String` - environment variable value

    # Panics
    When the environment variable is not set
"#]
fn get_env_or_panic(key: &str) -> String {
    match env::var(key) {
        Ok(val) => val,
        Err(_) => {
            let msg = format!("[ENV file read Error] '{}' must be set", key);
            error!("{}", msg);
            panic!("{}", msg);
        }
    }
}

#[doc = r#"
    Path of the TOML server configuration file, taken from `SERVER_CONFIG_PATH`.

    The file carries the listen address plus every dashboard setting
    (upload directory, grouping column, color palette, output naming).
    Initialized lazily on first access and cached afterwards.

    # Panics
    When the `SERVER_CONFIG_PATH` environment variable is not set
"#]
pub static SERVER_CONFIG_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("SERVER_CONFIG_PATH"));

#[doc = r#"
    Path of the HTML template served as the upload form page, taken from
    `UPLOAD_TEMPLATE_PATH`.

    The template is a static page with a multipart form posting to `/upload`.
    Initialized lazily on first access and cached afterwards.

    # Panics
    When the `UPLOAD_TEMPLATE_PATH` environment variable is not set
"#]
pub static UPLOAD_TEMPLATE_PATH: once_lazy<String> =
    once_lazy::new(|| get_env_or_panic("UPLOAD_TEMPLATE_PATH"));
