/// Nombre d'absents, réduit aux trois formes de message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Absentees {
    None,
    Singular,
    Plural,
}

impl Absentees {
    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Absentees::None,
            1 => Absentees::Singular,
            _ => Absentees::Plural,
        }
    }
}
