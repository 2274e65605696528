// src/config/consts.rs

// Net config
pub const API_URL: &str = "https://crawllab.onrender.com/parse";
pub const USER_AGENT: &str = concat!("crawllab/", env!("CARGO_PKG_VERSION"));

// Result view
pub const LINK_MAX_LEN: usize = 50;

// Local diagnostics
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log"; // inside STORE_DIR

// Window
pub const WINDOW_W: f32 = 760.0;
pub const WINDOW_H: f32 = 820.0;

// Footer
pub const APP_VERSION: &str = "v 3.0.0";
pub const DEVELOPER: &str = "Martin Daniels";

// (label, address)
pub const DONATIONS: &[(&str, &str)] = &[
    ("USDT - TRC20 | Tron", "TCorTf3kgUsp8bmvVs1coVqsCfnmNgJEJK"),
    ("BTC - COIN | Bitcoin", "bc1qaj7nhjsanmynp3zsk8amdfdfgwms3n9hzv0ezh"),
];

// (label, url)
pub const SOCIALS: &[(&str, &str)] = &[
    ("Github", "https://github.com/Martin13025"),
    ("Telegram", "https://t.me/M2rR4b4t"),
];
