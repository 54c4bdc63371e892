// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! Traditional correspondences of the seven planets.
//!
//! Names of the angelic rulers, intelligences and spirits follow Agrippa's
//! *Three Books of Occult Philosophy* (Book II, ch. 22).

use crate::Planet;

/// Static correspondences for one planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PlanetaryLore {
    pub planet: Planet,
    pub angelic_ruler: &'static str,
    pub zodiac_signs: &'static [&'static str],
    pub intelligence: &'static str,
    pub spirit: &'static str,
    pub metal: &'static str,
    pub attributes: &'static [&'static str],
    /// Shapes in which the planet's spirits are said to appear.
    pub familiar_forms: &'static [&'static str],
    pub mythology: &'static str,
}

static SATURN: PlanetaryLore = PlanetaryLore {
    planet: Planet::Saturn,
    angelic_ruler: "Cassiel",
    zodiac_signs: &["Capricorn", "Aquarius"],
    intelligence: "Agiel",
    spirit: "Zazel",
    metal: "Lead",
    attributes: &["Discipline", "Structure", "Responsibility", "Limitations", "Endings"],
    familiar_forms: &[
        "A King having a beard, riding on a Dragon",
        "An Old man with a beard",
        "An Old woman leaning on a staffe",
        "A Hog",
        "A Dragon",
        "An Owl",
        "A black Garment",
        "A Hooke or Sickle",
        "A Juniper-tree",
    ],
    mythology: "Cronus and Saturn, god of time: structure, discipline, limitation and karma.",
};

static JUPITER: PlanetaryLore = PlanetaryLore {
    planet: Planet::Jupiter,
    angelic_ruler: "Sachiel",
    zodiac_signs: &["Sagittarius", "Pisces"],
    intelligence: "Iophiel",
    spirit: "Hismael",
    metal: "Tin",
    attributes: &["Expansion", "Abundance", "Luck", "Prosperity", "High Achievement"],
    familiar_forms: &[
        "A King with a Sword drawn, riding on a Stag",
        "A Man wearing a Mitre in long raynment",
        "A Maid with a Laurel-Crown adorned with Flowers",
        "A Bull",
        "A Stag",
        "A Peacock",
        "An azure Garment",
        "A Sword",
        "A Box-tree",
    ],
    mythology: "Zeus and Jupiter, king of the gods: expansion, fortune, wisdom and justice.",
};

static MARS: PlanetaryLore = PlanetaryLore {
    planet: Planet::Mars,
    angelic_ruler: "Camael or Samael",
    zodiac_signs: &["Aries", "Scorpio"],
    intelligence: "Graphiel",
    spirit: "Barzabel",
    metal: "Iron",
    attributes: &["Energy", "Courage", "Passion", "Conflict", "Victory", "New Projects"],
    familiar_forms: &[
        "A King armed riding upon a Wolf",
        "A Man armed",
        "A Woman holding a buckler on her thigh",
        "A Hee-goat",
        "A Horse",
        "A Stag",
        "A red Garment",
        "Wool",
        "A Cheeslip",
    ],
    mythology: "Ares and Mars, god of war: aggression, desire, action and raw energy.",
};

static SUN: PlanetaryLore = PlanetaryLore {
    planet: Planet::Sun,
    angelic_ruler: "Michael",
    zodiac_signs: &["Leo"],
    intelligence: "Nakhiel",
    spirit: "Sorath",
    metal: "Gold",
    attributes: &["Health", "Success", "Power", "Wealth", "Fame", "Leadership"],
    familiar_forms: &[
        "A King having a Scepter, riding on a Lion",
        "A King crowned",
        "A Queen with a Scepter",
        "A Bird",
        "A Lion",
        "A Cock",
        "A yellow or golden Garment",
        "A Scepter",
    ],
    mythology: "Apollo, Helios and Ra: vitality, consciousness, the self and creative energy.",
};

static VENUS: PlanetaryLore = PlanetaryLore {
    planet: Planet::Venus,
    angelic_ruler: "Anael",
    zodiac_signs: &["Taurus", "Libra"],
    intelligence: "Hagiel",
    spirit: "Kedemel",
    metal: "Copper",
    attributes: &["Love", "Beauty", "Harmony", "Friendship", "Pleasure", "Art"],
    familiar_forms: &[
        "A King with a Scepter riding upon a Camel",
        "A Maid clothed and dressed beautifully",
        "A Maid naked",
        "A Shee-goat",
        "A Camel",
        "A Dove",
        "A white or green Garment",
        "Flowers",
        "The herb Savine",
    ],
    mythology: "Aphrodite and Venus, goddess of love: beauty, art, pleasure and social harmony.",
};

static MERCURY: PlanetaryLore = PlanetaryLore {
    planet: Planet::Mercury,
    angelic_ruler: "Raphael",
    zodiac_signs: &["Gemini", "Virgo"],
    intelligence: "Tiriel",
    spirit: "Taphthartharath",
    metal: "Quicksilver",
    attributes: &["Communication", "Intellect", "Travel", "Business", "Eloquence"],
    familiar_forms: &[
        "A King riding upon a Bear",
        "A fair Youth",
        "A Woman holding a distaffe",
        "A Dog",
        "A Shee-bear",
        "A Magpie",
        "A Garment of sundry changeable colours",
        "A Rod",
        "A little staffe",
    ],
    mythology: "Hermes and Mercury, messenger of the gods: communication, intellect and commerce.",
};

static MOON: PlanetaryLore = PlanetaryLore {
    planet: Planet::Moon,
    angelic_ruler: "Gabriel",
    zodiac_signs: &["Cancer"],
    intelligence: "Malkiel or Malcha",
    spirit: "Chasmodai or Hasmodai",
    metal: "Silver",
    attributes: &["Emotions", "Intuition", "Dreams", "Home Life", "Healing", "Divination"],
    familiar_forms: &[
        "A King like an Archer riding upon a Doe",
        "A little Boy",
        "A Woman-hunter with a bow and arrows",
        "A Cow",
        "A little Doe",
        "A Goose",
        "A Garment green or silver-coloured",
        "An Arrow",
        "A Creature having many feet",
    ],
    mythology: "Artemis, Selene and Diana: emotion, the subconscious, intuition and the tides of life.",
};

impl Planet {
    /// Traditional correspondences of this planet.
    pub fn lore(self) -> &'static PlanetaryLore {
        match self {
            Planet::Saturn => &SATURN,
            Planet::Jupiter => &JUPITER,
            Planet::Mars => &MARS,
            Planet::Sun => &SUN,
            Planet::Venus => &VENUS,
            Planet::Mercury => &MERCURY,
            Planet::Moon => &MOON,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CHALDEAN_ORDER;

    #[test]
    fn every_entry_belongs_to_its_planet() {
        for planet in CHALDEAN_ORDER {
            assert_eq!(planet.lore().planet, planet);
            assert!(!planet.lore().attributes.is_empty());
            assert!(!planet.lore().familiar_forms.is_empty());
        }
    }

    #[test]
    fn metals() {
        assert_eq!(Planet::Sun.lore().metal, "Gold");
        assert_eq!(Planet::Moon.lore().metal, "Silver");
        assert_eq!(Planet::Mercury.lore().metal, "Quicksilver");
    }

    #[test]
    fn familiar_forms_open_with_the_kings_mount() {
        assert_eq!(
            Planet::Sun.lore().familiar_forms.first(),
            Some(&"A King having a Scepter, riding on a Lion")
        );
        assert_eq!(Planet::Saturn.lore().familiar_forms.last(), Some(&"A Juniper-tree"));
        assert_eq!(Planet::Moon.lore().familiar_forms.len(), 9);
    }
}
