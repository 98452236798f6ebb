mod cards;
mod footer;
mod icon;
mod logo;
mod nav;
mod page_hero;
mod section;

pub use cards::{CheckList, CtaLink, IconCard, Pill, Stat, StatTile, Trend};
pub use footer::Footer;
pub use icon::{Icon, IconName};
pub use logo::OrioLogo;
pub use nav::Navbar;
pub use page_hero::PageHero;
pub use section::{Rise, Section, SectionHeading, Tone};
