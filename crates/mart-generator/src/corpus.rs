//! Embedded word corpora for free-text fields.
//!
//! The corpora are small on purpose: duplicate usernames, emails or product
//! names across rows are acceptable, and no uniqueness is enforced anywhere.

use crate::provider::RandomProvider;

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas",
    "Sarah", "Carlos", "Karen", "Daniel", "Lisa", "Matthew", "Nancy", "Anthony", "Betty",
    "Mark", "Sandra", "Steven", "Ashley", "Andrew", "Emily", "Kenneth", "Donna", "Joshua",
    "Michelle", "Kevin", "Carol", "Brian", "Amanda",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];

pub const EMAIL_DOMAINS: &[&str] = &[
    "example.com", "example.org", "example.net", "mail.test", "shopmail.dev",
];

/// Password alphabet (faker-style mixed charset).
pub const PASSWORD_CHARSET: &str =
    "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*";

pub const JOB_PREFIXES: &[&str] = &[
    "Senior", "Junior", "Lead", "Principal", "Associate", "Chief", "Vice President", "Manager",
    "Director", "Analyst", "Engineer", "Developer", "Consultant", "Specialist", "Coordinator",
    "Assistant", "Supervisor", "Officer", "Administrator", "Technician", "Executive", "Intern",
    "Trainee", "Head", "Deputy",
];

pub const JOB_BASES: &[&str] = &[
    "Accountant", "Architect", "Biologist", "Chemist", "Copywriter", "Curator", "Economist",
    "Editor", "Electrician", "Geologist", "Illustrator", "Journalist", "Librarian", "Nurse",
    "Optician", "Paramedic", "Pharmacist", "Photographer", "Physiotherapist", "Programmer",
    "Psychologist", "Researcher", "Surveyor", "Teacher", "Translator",
];

pub const COMPANY_BASES: &[&str] = &[
    "Acme", "Northwind", "Globex", "Initech", "Umbra", "Vertex", "Blue Harbor", "Ironwood",
    "Silverline", "Crestview", "Summit Peak", "Redwood", "Lakeshore", "Stonebridge", "Fairfield",
    "Brightside", "Clearwater", "Oakmont", "Pinnacle", "Riverbend",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Corp", "Ltd", "Group", "Enterprises", "Solutions", "Technologies", "Systems",
    "Services", "Consulting", "Partners", "Associates", "Holdings", "Ventures", "Industries",
    "Corporation", "Company", "Agency", "Studio",
];

pub const ADDRESS_TITLES: &[&str] = &[
    "Home Address",
    "Work Address",
    "Billing Address",
    "Shipping Address",
    "Vacation Home",
];

pub const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Elm", "Pine", "Walnut", "Chestnut", "Willow", "Birch", "Juniper",
    "Highland", "Sunset", "Meadow", "Ridge", "Lakeview", "Park", "Main", "Church", "Mill",
    "Harbor",
];

pub const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Boulevard", "Lane", "Drive", "Court", "Road", "Way", "Terrace", "Place",
];

/// Countries and a matching city, index-aligned so a picked pair is coherent.
pub const COUNTRIES: &[&str] = &[
    "United States", "Canada", "United Kingdom", "Germany", "France", "Spain", "Italy",
    "Netherlands", "Sweden", "Australia", "Japan", "Brazil",
];

pub const CITIES: &[&str] = &[
    "Portland", "Toronto", "Manchester", "Hamburg", "Lyon", "Valencia", "Turin", "Utrecht",
    "Gothenburg", "Melbourne", "Osaka", "Curitiba",
];

pub const CARD_PROVIDERS: &[&str] = &[
    "VISA 16 digit", "VISA 13 digit", "Mastercard", "American Express", "Discover", "JCB 16 digit",
    "Diners Club / Carte Blanche", "Maestro",
];

pub const CATEGORY_NAMES: &[&str] = &[
    "Electronics",
    "Clothing & Apparel",
    "Home & Kitchen",
    "Books & Media",
    "Sports & Outdoors",
    "Beauty & Personal Care",
    "Toys & Games",
    "Automotive",
    "Garden & Patio",
    "Food & Beverages",
];

/// Lorem-adjacent filler vocabulary for sentences and paragraphs.
pub const WORDS: &[&str] = &[
    "quality", "modern", "design", "value", "simple", "durable", "everyday", "classic", "bright",
    "compact", "natural", "premium", "reliable", "popular", "original", "fresh", "practical",
    "versatile", "seasonal", "essential", "comfort", "style", "balance", "choice", "detail",
    "finish", "material", "feature", "service", "range",
];

/// Sentence of `words` filler words, capitalized, full stop.
pub fn sentence(rng: &mut RandomProvider, words: usize) -> String {
    let mut parts = Vec::with_capacity(words);
    for _ in 0..words {
        parts.push(*rng.pick(WORDS));
    }
    let mut s = parts.join(" ");
    if let Some(first) = s.get_mut(0..1) {
        first.make_ascii_uppercase();
    }
    s.push('.');
    s
}

/// Paragraph of `sentences` short sentences.
pub fn paragraph(rng: &mut RandomProvider, sentences: usize) -> String {
    let parts: Vec<String> = (0..sentences)
        .map(|_| {
            let n = rng.int_range(5, 9) as usize;
            sentence(rng, n)
        })
        .collect();
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_city_lists_are_aligned() {
        assert_eq!(COUNTRIES.len(), CITIES.len());
    }

    #[test]
    fn test_sentence_shape() {
        let mut rng = RandomProvider::from_seed(42);
        let s = sentence(&mut rng, 5);

        assert!(s.ends_with('.'));
        assert!(s.chars().next().unwrap().is_ascii_uppercase());
        assert_eq!(s.split_whitespace().count(), 5);
    }

    #[test]
    fn test_paragraph_has_requested_sentences() {
        let mut rng = RandomProvider::from_seed(42);
        let p = paragraph(&mut rng, 2);
        assert_eq!(p.matches('.').count(), 2);
    }
}
