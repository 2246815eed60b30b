use std::path::PathBuf;

pub fn default_source() -> PathBuf {
    PathBuf::from("./")
}

pub fn default_templates_dir() -> PathBuf {
    PathBuf::from("templates")
}

pub fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

pub fn default_template() -> String {
    "page.html".to_string()
}

pub fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub fn default_port() -> u16 {
    8000
}
