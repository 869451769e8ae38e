/// A user name, matched exactly and case-sensitively
pub type Identity = String;

pub const KNOWN_USERS: [&str; 2] = ["Packy", "Joan"];
