// MCP (Model Context Protocol) server exposing Typefully draft tools
// to agent clients (Claude Desktop, editors, etc.) over stdio

pub mod protocol;
pub mod server;
pub mod tools;

pub use server::McpServer;
