pub mod cdx_server;
