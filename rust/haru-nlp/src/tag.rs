//! Part-of-speech categories emitted by the morphological tagger.
//!
//! The token source analyzes raw text into morphemes annotated with Sejong
//! tag codes (`NNG`, `VV`, `JKO`, …). This module models that closed tag set
//! as an enum and groups it into the categories the pipeline actually acts
//! on: nominals become phrase material, verbals become action candidates,
//! case particles steer noun retention, and a small set of connective tags
//! marks clause boundaries.

use std::fmt;

/// A part-of-speech category assigned to one morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Common noun (`NNG`).
    CommonNoun,
    /// Proper noun (`NNP`).
    ProperNoun,
    /// Bound (dependent) noun, including unit nouns such as 시 (`NNB`, `NNBC`).
    BoundNoun,
    /// Pronoun (`NP`).
    Pronoun,
    /// Native numeral word such as 여덟 (`NR`).
    NumeralWord,
    /// Verb stem (`VV`).
    Verb,
    /// Descriptive verb (adjective) stem (`VA`).
    Adjective,
    /// Auxiliary predicate stem (`VX`).
    AuxiliaryVerb,
    /// Positive copula 이- (`VCP`).
    Copula,
    /// Negative copula 아니- (`VCN`).
    NegativeCopula,
    /// Determiner (`MM`).
    Determiner,
    /// General adverb (`MAG`).
    Adverb,
    /// Conjunctive adverb such as 그리고 (`MAJ`).
    ConjunctiveAdverb,
    /// Interjection (`IC`).
    Interjection,
    /// Subject case particle 이/가 (`JKS`).
    SubjectParticle,
    /// Complement case particle (`JKC`).
    ComplementParticle,
    /// Genitive case particle 의 (`JKG`).
    GenitiveParticle,
    /// Object case particle 을/를 (`JKO`).
    ObjectParticle,
    /// Adverbial case particle 에/에서/로, also comitative 와/과 (`JKB`).
    AdverbialParticle,
    /// Vocative case particle (`JKV`).
    VocativeParticle,
    /// Quotative case particle (`JKQ`).
    QuotativeParticle,
    /// Auxiliary particle 은/는/도/만 (`JX`).
    AuxiliaryParticle,
    /// Conjunctive particle 와/과/하고 joining nouns (`JC`).
    ConjunctiveParticle,
    /// Pre-final ending 었/겠/시 (`EP`).
    PreFinalEnding,
    /// Sentence-final ending 다/어요/야지 (`EF`).
    FinalEnding,
    /// Connective ending 고/으며/지만 (`EC`).
    ConnectiveEnding,
    /// Nominalizing ending 음/기 (`ETN`).
    NominalizingEnding,
    /// Adnominal ending 은/는/을 (`ETM`).
    AdnominalEnding,
    /// Noun prefix (`XPN`).
    NounPrefix,
    /// Noun-deriving suffix (`XSN`).
    NounSuffix,
    /// Verb-deriving suffix 하/되/시키 (`XSV`).
    VerbSuffix,
    /// Adjective-deriving suffix 스럽/롭 (`XSA`).
    AdjectiveSuffix,
    /// Non-autonomous root (`XR`).
    Root,
    /// Sentence-final punctuation `.` `!` `?` (`SF`).
    TerminalPunctuation,
    /// Ellipsis `…` (`SE`).
    Ellipsis,
    /// Separator `,` `·` `/` (`SC`, `SP`).
    Separator,
    /// Paired bracket or quotation mark (`SSO`, `SSC`, `SS`).
    Bracket,
    /// Any other symbol (`SY`, `SO`).
    Symbol,
    /// Word written in a foreign (non-Korean) script (`SL`).
    ForeignWord,
    /// Word written in Hanja (`SH`).
    HanjaWord,
    /// Arabic numeral literal (`SN`).
    Number,
    /// A code this crate does not model; treated as functional filler.
    Unknown,
}

impl Tag {
    /// Map a tagger code string to a [`Tag`].
    ///
    /// Compound codes such as `VV+EP` (a contracted morpheme) classify by
    /// their leading component. Codes outside the modeled set map to
    /// [`Tag::Unknown`] rather than failing: an exotic tag never aborts an
    /// extraction, it is merely invisible to it.
    pub fn from_code(code: &str) -> Self {
        let code = code.split('+').next().unwrap_or(code);
        match code {
            "NNG" => Tag::CommonNoun,
            "NNP" => Tag::ProperNoun,
            "NNB" | "NNBC" => Tag::BoundNoun,
            "NP" => Tag::Pronoun,
            "NR" => Tag::NumeralWord,
            "VV" => Tag::Verb,
            "VA" => Tag::Adjective,
            "VX" => Tag::AuxiliaryVerb,
            "VCP" => Tag::Copula,
            "VCN" => Tag::NegativeCopula,
            "MM" => Tag::Determiner,
            "MAG" => Tag::Adverb,
            "MAJ" => Tag::ConjunctiveAdverb,
            "IC" => Tag::Interjection,
            "JKS" => Tag::SubjectParticle,
            "JKC" => Tag::ComplementParticle,
            "JKG" => Tag::GenitiveParticle,
            "JKO" => Tag::ObjectParticle,
            "JKB" => Tag::AdverbialParticle,
            "JKV" => Tag::VocativeParticle,
            "JKQ" => Tag::QuotativeParticle,
            "JX" => Tag::AuxiliaryParticle,
            "JC" => Tag::ConjunctiveParticle,
            "EP" => Tag::PreFinalEnding,
            "EF" => Tag::FinalEnding,
            "EC" => Tag::ConnectiveEnding,
            "ETN" => Tag::NominalizingEnding,
            "ETM" => Tag::AdnominalEnding,
            "XPN" => Tag::NounPrefix,
            "XSN" => Tag::NounSuffix,
            "XSV" => Tag::VerbSuffix,
            "XSA" => Tag::AdjectiveSuffix,
            "XR" => Tag::Root,
            "SF" => Tag::TerminalPunctuation,
            "SE" => Tag::Ellipsis,
            "SC" | "SP" => Tag::Separator,
            "SSO" | "SSC" | "SS" => Tag::Bracket,
            "SY" | "SO" => Tag::Symbol,
            "SL" => Tag::ForeignWord,
            "SH" => Tag::HanjaWord,
            "SN" => Tag::Number,
            _ => Tag::Unknown,
        }
    }

    /// The canonical tagger code for this category.
    pub fn code(&self) -> &'static str {
        match self {
            Tag::CommonNoun => "NNG",
            Tag::ProperNoun => "NNP",
            Tag::BoundNoun => "NNB",
            Tag::Pronoun => "NP",
            Tag::NumeralWord => "NR",
            Tag::Verb => "VV",
            Tag::Adjective => "VA",
            Tag::AuxiliaryVerb => "VX",
            Tag::Copula => "VCP",
            Tag::NegativeCopula => "VCN",
            Tag::Determiner => "MM",
            Tag::Adverb => "MAG",
            Tag::ConjunctiveAdverb => "MAJ",
            Tag::Interjection => "IC",
            Tag::SubjectParticle => "JKS",
            Tag::ComplementParticle => "JKC",
            Tag::GenitiveParticle => "JKG",
            Tag::ObjectParticle => "JKO",
            Tag::AdverbialParticle => "JKB",
            Tag::VocativeParticle => "JKV",
            Tag::QuotativeParticle => "JKQ",
            Tag::AuxiliaryParticle => "JX",
            Tag::ConjunctiveParticle => "JC",
            Tag::PreFinalEnding => "EP",
            Tag::FinalEnding => "EF",
            Tag::ConnectiveEnding => "EC",
            Tag::NominalizingEnding => "ETN",
            Tag::AdnominalEnding => "ETM",
            Tag::NounPrefix => "XPN",
            Tag::NounSuffix => "XSN",
            Tag::VerbSuffix => "XSV",
            Tag::AdjectiveSuffix => "XSA",
            Tag::Root => "XR",
            Tag::TerminalPunctuation => "SF",
            Tag::Ellipsis => "SE",
            Tag::Separator => "SC",
            Tag::Bracket => "SS",
            Tag::Symbol => "SY",
            Tag::ForeignWord => "SL",
            Tag::HanjaWord => "SH",
            Tag::Number => "SN",
            Tag::Unknown => "UNKNOWN",
        }
    }

    /// Whether this morpheme can contribute to a noun phrase.
    ///
    /// Covers common/proper/bound nouns plus foreign-script and Hanja words,
    /// which the tagger reports separately but which behave as nouns in
    /// to-do phrases (브랜드 names, English product names, …).
    pub fn is_nominal(&self) -> bool {
        matches!(
            self,
            Tag::CommonNoun | Tag::ProperNoun | Tag::BoundNoun | Tag::ForeignWord | Tag::HanjaWord
        )
    }

    /// Whether this morpheme is an action-verb candidate: verb stems,
    /// descriptive stems and verb-deriving suffixes (the 하 of 운동하다).
    pub fn is_verbal(&self) -> bool {
        matches!(self, Tag::Verb | Tag::Adjective | Tag::VerbSuffix)
    }

    /// Whether this tag closes the current clause: connective endings,
    /// conjunctive particles/adverbs, sentence-final endings and terminal
    /// punctuation.
    pub fn is_clause_boundary(&self) -> bool {
        matches!(
            self,
            Tag::ConnectiveEnding
                | Tag::ConjunctiveParticle
                | Tag::ConjunctiveAdverb
                | Tag::FinalEnding
                | Tag::TerminalPunctuation
        )
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
