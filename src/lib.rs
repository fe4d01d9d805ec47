//! 계산 엔진과 파생 규칙을 라이브러리로 분리해 CLI와 GUI가 함께 쓴다.

pub mod app;
pub mod config;
pub mod derive;
pub mod engine;
pub mod i18n;
pub mod logic;
pub mod model;
pub mod report;
pub mod session;
pub mod store;
pub mod ui_cli;
