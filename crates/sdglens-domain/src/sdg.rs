//! SDG catalog - the 17 goals, their names and keyword sets

use std::fmt;

/// Number of Sustainable Development Goals
pub const SDG_COUNT: usize = 17;

/// Identifier of a Sustainable Development Goal
///
/// Valid goals are numbered 1 through 17. The value 0 is reserved for the
/// "no match" sentinel and is only produced by [`SdgId::NO_MATCH`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SdgId(u8);

impl SdgId {
    /// Sentinel identifier used when no goal clears the confidence floor
    pub const NO_MATCH: SdgId = SdgId(0);

    /// Create an identifier for goal `number` (1..=17)
    ///
    /// # Examples
    ///
    /// ```
    /// use sdglens_domain::SdgId;
    ///
    /// assert_eq!(SdgId::new(6).unwrap().number(), 6);
    /// assert!(SdgId::new(0).is_none());
    /// assert!(SdgId::new(18).is_none());
    /// ```
    pub fn new(number: u8) -> Option<Self> {
        if (1..=SDG_COUNT as u8).contains(&number) {
            Some(Self(number))
        } else {
            None
        }
    }

    /// Create an identifier from a zero-based class index (index 0 is SDG 1)
    pub fn from_index(index: usize) -> Option<Self> {
        if index < SDG_COUNT {
            Some(Self(index as u8 + 1))
        } else {
            None
        }
    }

    /// The goal number (0 for the sentinel)
    pub fn number(&self) -> u8 {
        self.0
    }

    /// Zero-based class index, `None` for the sentinel
    pub fn index(&self) -> Option<usize> {
        if self.is_no_match() {
            None
        } else {
            Some(self.0 as usize - 1)
        }
    }

    /// Whether this is the "no match" sentinel
    pub fn is_no_match(&self) -> bool {
        self.0 == 0
    }

    /// Iterate over all 17 goal identifiers in ascending order
    pub fn all() -> impl Iterator<Item = SdgId> {
        (1..=SDG_COUNT as u8).map(SdgId)
    }

    /// Catalog entry for this goal, `None` for the sentinel
    pub fn sdg(&self) -> Option<&'static Sdg> {
        self.index().map(|i| &SDGS[i])
    }
}

impl fmt::Display for SdgId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Sustainable Development Goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sdg {
    /// Goal identifier
    pub id: SdgId,

    /// Canonical goal name (e.g. "Clean Water and Sanitation")
    pub name: &'static str,

    /// Short descriptor appended to the name in zero-shot candidate labels
    pub descriptor: &'static str,

    /// Domain keywords in declared (matching) order
    pub keywords: &'static [&'static str],
}

impl Sdg {
    /// Candidate label sent to zero-shot classifiers: `"<name> - <descriptor>"`
    pub fn candidate_label(&self) -> String {
        format!("{} - {}", self.name, self.descriptor)
    }
}

/// The 17 goals, indexed by `id - 1`
pub const SDGS: [Sdg; SDG_COUNT] = [
    Sdg {
        id: SdgId(1),
        name: "No Poverty",
        descriptor: "ending poverty in all its forms",
        keywords: &["poverty", "poor", "income", "economic", "financial"],
    },
    Sdg {
        id: SdgId(2),
        name: "Zero Hunger",
        descriptor: "ending hunger and promoting sustainable agriculture",
        keywords: &["hunger", "food", "nutrition", "agriculture", "farming"],
    },
    Sdg {
        id: SdgId(3),
        name: "Good Health and Well-being",
        descriptor: "ensuring healthy lives",
        keywords: &["health", "medical", "disease", "healthcare", "wellbeing"],
    },
    Sdg {
        id: SdgId(4),
        name: "Quality Education",
        descriptor: "ensuring inclusive education",
        keywords: &["education", "school", "learning", "student", "teacher"],
    },
    Sdg {
        id: SdgId(5),
        name: "Gender Equality",
        descriptor: "achieving gender equality",
        keywords: &["gender", "women", "equality", "female", "empowerment"],
    },
    Sdg {
        id: SdgId(6),
        name: "Clean Water and Sanitation",
        descriptor: "ensuring water availability",
        keywords: &["water", "sanitation", "hygiene", "clean", "wastewater"],
    },
    Sdg {
        id: SdgId(7),
        name: "Affordable and Clean Energy",
        descriptor: "ensuring clean energy access",
        keywords: &["energy", "renewable", "solar", "electricity", "power"],
    },
    Sdg {
        id: SdgId(8),
        name: "Decent Work and Economic Growth",
        descriptor: "promoting economic growth",
        keywords: &["employment", "work", "economic", "growth", "job"],
    },
    Sdg {
        id: SdgId(9),
        name: "Industry, Innovation and Infrastructure",
        descriptor: "building infrastructure",
        keywords: &["industry", "innovation", "infrastructure", "technology"],
    },
    Sdg {
        id: SdgId(10),
        name: "Reduced Inequality",
        descriptor: "reducing inequality",
        keywords: &["inequality", "equality", "inclusion", "discrimination"],
    },
    Sdg {
        id: SdgId(11),
        name: "Sustainable Cities and Communities",
        descriptor: "making cities sustainable",
        keywords: &["cities", "urban", "sustainable", "community", "housing"],
    },
    Sdg {
        id: SdgId(12),
        name: "Responsible Consumption and Production",
        descriptor: "ensuring sustainable consumption",
        keywords: &["consumption", "production", "waste", "sustainable"],
    },
    Sdg {
        id: SdgId(13),
        name: "Climate Action",
        descriptor: "combating climate change",
        keywords: &["climate", "carbon", "emission", "warming", "environmental"],
    },
    Sdg {
        id: SdgId(14),
        name: "Life Below Water",
        descriptor: "conserving oceans",
        keywords: &["ocean", "marine", "water", "sea", "aquatic"],
    },
    Sdg {
        id: SdgId(15),
        name: "Life on Land",
        descriptor: "protecting terrestrial ecosystems",
        keywords: &["forest", "biodiversity", "land", "ecosystem", "wildlife"],
    },
    Sdg {
        id: SdgId(16),
        name: "Peace, Justice and Strong Institutions",
        descriptor: "promoting peace",
        keywords: &["peace", "justice", "institutions", "governance", "rights"],
    },
    Sdg {
        id: SdgId(17),
        name: "Partnerships for the Goals",
        descriptor: "strengthening partnerships",
        keywords: &["partnership", "collaboration", "cooperation", "global"],
    },
];
