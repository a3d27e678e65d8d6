// Landing page sections

mod features;
mod footer;
mod header;
mod hero;
mod roadmap;
mod why_samwise;

pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use roadmap::Roadmap;
pub use why_samwise::WhySamwise;
