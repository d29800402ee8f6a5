mod contact_card;
mod decorative_row;
mod icons;
mod spin_badge;

pub use contact_card::ContactCard;
pub use decorative_row::DecorativeRow;
pub use icons::{MailIcon, SettingsIcon, WrenchIcon};
pub use spin_badge::SpinBadge;
