//! Static term tables for entity resolution.
//!
//! Every table is a slice of lowercase terms matched as case-insensitive
//! substrings of a label or entity description. Bump `TERMS_VERSION`
//! whenever a table changes so `resolve-bench` runs can be compared.

pub const TERMS_VERSION: u32 = 3;

/// Labels containing one of these are kept as `supporting_labels`.
pub const ART_LABEL_TERMS: &[&str] = &[
    "art", "painting", "drawing", "sculpture", "artwork", "portrait", "landscape",
    "still life", "masterpiece",
];

/// Well-known artworks and buildings. A hit makes an entity a known subject.
pub const KNOWN_SUBJECTS: &[&str] = &[
    "starry night", "mona lisa", "the scream", "guernica", "the persistence of memory",
    "water lilies", "the last supper", "the birth of venus", "american gothic",
    "the great wave", "david", "the creation of adam", "the sistine chapel",
    "the school of athens", "girl with a pearl earring", "the night watch", "the kiss",
    "the thinker", "les demoiselles d'avignon", "the blue rider", "composition vii",
    "no. 5", "campbell's soup cans", "marilyn diptych", "the great wave off kanagawa",
    "girl before a mirror", "the old guitarist", "the weeping woman", "three musicians",
    "the blue period", "rose period", "cubism",
    // buildings
    "eiffel tower", "sagrada familia", "taj mahal", "colosseum", "parthenon",
    "notre-dame", "notre dame", "sydney opera house", "burj khalifa",
    "empire state building", "chrysler building", "flatiron building", "fallingwater",
    "hagia sophia", "st. peter's basilica", "leaning tower of pisa", "villa savoye",
    "louvre pyramid", "big ben",
];

/// Well-known artists and architects. A hit makes an entity a known creator.
pub const KNOWN_CREATORS: &[&str] = &[
    "michelangelo", "leonardo da vinci", "vincent van gogh", "pablo picasso",
    "claude monet", "edvard munch", "salvador dali", "rembrandt", "andy warhol",
    "jackson pollock", "wassily kandinsky", "henri matisse", "auguste rodin",
    "gustav klimt", "paul gauguin", "paul cezanne", "edgar degas", "mary cassatt",
    "frida kahlo", "georgia o'keeffe", "mark rothko", "willem de kooning", "leonardo",
    "picasso", "van gogh", "monet", "dali", "warhol", "pollock", "kandinsky", "matisse",
    "rodin", "klimt", "gauguin", "cezanne", "degas",
    // architects
    "antoni gaudi", "gaudi", "frank lloyd wright", "le corbusier", "zaha hadid",
    "frank gehry", "i. m. pei", "mies van der rohe", "norman foster", "renzo piano",
];

/// Vocabulary that marks an entity as a description rather than a name.
pub const GENERIC_TERMS: &[&str] = &[
    "painting", "sculpture", "artwork", "masterpiece", "statue", "bust", "portrait",
    "landscape", "still life", "art", "image", "picture", "photo", "photograph", "drawing",
    "sketch", "canvas", "oil painting", "watercolor", "acrylic", "mixed media", "collage",
    "etching", "lithograph", "fresco", "mural", "relief", "installation",
    "performance art", "digital art", "conceptual art", "abstract art", "figurative art",
    "contemporary art", "modern art", "classical art", "fine art", "visual art",
    "graphic art", "decorative art", "applied art", "folk art", "naive art",
    "primitive art", "cave painting", "rock art", "street art", "graffiti", "mosaic",
    "tapestry", "ceramic", "pottery", "glass art", "metalwork", "wood carving",
    "stone carving", "bronze", "marble", "plaster", "clay", "textile", "fiber art",
    "jewelry", "furniture", "architecture", "illustration", "poster", "book cover",
    "album cover", "logo", "symbol", "icon", "emblem", "badge", "medal", "coin", "stamp",
    "postcard", "calendar", "magazine", "newspaper", "advertisement", "billboard",
    "banner", "flag", "pennant", "streamer", "decoration", "ornament", "accessory", "gift",
    "souvenir", "keepsake", "memento", "relic", "artifact", "antique", "vintage",
    "collectible", "curio", "trinket", "bauble", "knickknack", "bric-a-brac", "gewgaw",
    "gimcrack", "novelty", "toy", "puzzle", "miniature", "replica", "reproduction",
    "facsimile", "duplicate", "clone", "imitation", "fake", "forgery", "counterfeit",
    "knockoff", "bootleg", "pirate", "unauthorized", "illegal", "stolen", "looted",
    "smuggled", "contraband", "black market", "underground", "secret", "hidden",
    "concealed", "camouflaged", "disguised", "masked", "veiled", "covered", "wrapped",
    "packaged", "boxed", "crated", "shipped", "delivered", "transported", "relocated",
    "transferred", "purchased", "acquired", "obtained", "removed", "destroyed", "damaged",
    "broken", "fixed", "repaired", "restored", "conserved", "preserved", "maintained",
    "cleaned", "polished", "refinished", "refurbished", "renovated", "updated",
    "modernized", "improved", "enhanced", "upgraded", "modified", "altered", "changed",
    "transformed", "converted", "adapted", "adjusted", "customized", "personalized",
    "tailored", "fitted", "sized", "scaled", "proportioned", "balanced", "harmonized",
    "coordinated", "matched", "paired", "grouped", "categorized", "classified", "sorted",
    "organized", "arranged", "displayed", "exhibited", "shown", "presented",
    "demonstrated", "explained", "described", "documented", "recorded", "catalogued",
    "indexed", "referenced", "cited", "quoted", "mentioned", "noted", "observed",
    "noticed", "spotted", "seen", "viewed", "looked", "watched", "studied", "examined",
    "analyzed", "evaluated", "assessed", "judged", "critiqued", "reviewed", "rated",
    "ranked", "scored", "graded", "marked", "labeled", "tagged", "named", "titled",
    "captioned", "subtitled", "legend", "inscription", "writing", "script", "font",
    "typeface", "typography", "calligraphy", "handwriting", "signature", "autograph",
    "monogram", "excerpt", "quote", "citation", "footnote", "endnote", "bibliography",
    "reference point", "starting point", "artistry", "craftsmanship", "workmanship",
    "medium",
];

/// People and institutions that make or hold works, never the work itself.
pub const CREATOR_ROLE_TERMS: &[&str] = &[
    "artist", "painter", "sculptor", "creator", "maker", "designer", "illustrator",
    "draftsman", "cartoonist", "animator", "photographer", "filmmaker", "director",
    "producer", "writer", "author", "poet", "novelist", "playwright", "screenwriter",
    "composer", "musician", "singer", "performer", "actor", "actress", "dancer",
    "choreographer", "architect", "engineer", "scientist", "inventor", "explorer",
    "collector", "curator", "critic", "journalist", "editor", "publisher", "dealer",
    "gallery", "museum", "exhibition", "auction", "foundation", "institution",
    "patron", "benefactor", "sponsor", "professor", "teacher", "scholar", "emperor",
    "empress", "president", "governor", "ambassador",
];

/// Narrow role terms for the last-chance creator rescan.
pub const RESCAN_CREATOR_TERMS: &[&str] = &["artist", "painter", "sculptor", "creator"];

/// Surnames recognisable on their own inside a subject description.
pub const FAMOUS_SURNAMES: &[&str] = &[
    "van gogh", "picasso", "monet", "da vinci", "michelangelo", "rembrandt", "warhol",
    "dali", "kandinsky", "pollock",
];

/// Food labels too broad to name a dish. Matched exactly, not as substrings.
pub const FOOD_GENERIC_TERMS: &[&str] = &[
    "food", "meal", "dish", "ingredient", "pasta", "noodle", "noodles", "rice", "bread",
    "meat", "vegetable", "soup", "salad", "spice", "spices", "herb", "herbs", "sauce",
    "condiment", "side dish", "main dish", "appetizer", "dessert", "cuisine", "cooking",
    "prepared food", "processed food",
];

/// True if `text` (any case) contains one of `terms`.
pub fn contains_any(text: &str, terms: &[&str]) -> bool {
    let lower = text.to_lowercase();
    terms.iter().any(|term| lower.contains(term))
}
