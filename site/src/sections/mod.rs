// Landing page sections

mod contact;
mod courses;
mod footer;
mod hero;
mod journey;
mod nav;
mod stats;
mod testimonials;
mod why_us;

pub use contact::Contact;
pub use courses::Courses;
pub use footer::Footer;
pub use hero::Hero;
pub use journey::Journey;
pub use nav::Nav;
pub use stats::Stats;
pub use testimonials::Testimonials;
pub use why_us::WhyUs;
