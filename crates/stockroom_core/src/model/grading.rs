//! Student result record and grade bands.

use crate::model::entity::{EntityId, Keyed};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Letter grade derived from a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a score to its band: 80+ A, 70+ B, 60+ C, 50+ D, otherwise F.
    pub fn from_score(score: i32) -> Self {
        match score {
            s if s >= 80 => Self::A,
            s if s >= 70 => Self::B,
            s if s >= 60 => Self::C,
            s if s >= 50 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    id: EntityId,
    pub full_name: String,
    pub score: i32,
}

impl Student {
    pub fn new(id: EntityId, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}

impl Keyed for Student {
    type Key = EntityId;

    fn key(&self) -> EntityId {
        self.id
    }
}

impl Display for Student {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ID:{}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade().as_str()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::{Grade, Student};

    #[test]
    fn grade_bands_use_inclusive_lower_bounds() {
        assert_eq!(Grade::from_score(100), Grade::A);
        assert_eq!(Grade::from_score(80), Grade::A);
        assert_eq!(Grade::from_score(79), Grade::B);
        assert_eq!(Grade::from_score(70), Grade::B);
        assert_eq!(Grade::from_score(60), Grade::C);
        assert_eq!(Grade::from_score(50), Grade::D);
        assert_eq!(Grade::from_score(49), Grade::F);
        assert_eq!(Grade::from_score(-5), Grade::F);
    }

    #[test]
    fn display_includes_grade() {
        let student = Student::new(3, "Ama Owusu", 72);
        assert_eq!(student.to_string(), "Ama Owusu (ID:3): Score = 72, Grade = B");
    }
}
