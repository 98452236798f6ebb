mod about;
mod case_studies;
mod contact;
mod home;
mod ipu;
mod not_found;
mod platform;
mod resources;
mod roi;
mod solutions_by_role;
mod vbhc;
mod what_we_solve;

pub use about::AboutUsPage;
pub use case_studies::CaseStudiesPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use ipu::IpuSolutionsPage;
pub use not_found::NotFoundPage;
pub use platform::PlatformPage;
pub use resources::ResourcesPage;
pub use roi::RoiPage;
pub use solutions_by_role::SolutionsByRolePage;
pub use vbhc::VbhcPage;
pub use what_we_solve::WhatWeSolvePage;
