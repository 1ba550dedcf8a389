mod export;
mod models;
