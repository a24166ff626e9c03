pub struct Config {
    pub api_base_url: &'static str,
}

impl Config {
    pub const fn new() -> Self {
        Self {
            api_base_url: "http://localhost:3333"
        }
    }
}

pub const CONFIG: Config = Config::new();
