//! Base stats of a creature

use pokedex_protocol::StatName;

/// The six base stats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    pub fn new(
        hp: u32,
        attack: u32,
        defense: u32,
        special_attack: u32,
        special_defense: u32,
        speed: u32,
    ) -> Self {
        Self {
            hp,
            attack,
            defense,
            special_attack,
            special_defense,
            speed,
        }
    }

    /// Get a stat
    pub fn get(&self, stat: StatName) -> u32 {
        match stat {
            StatName::Hp => self.hp,
            StatName::Attack => self.attack,
            StatName::Defense => self.defense,
            StatName::SpecialAttack => self.special_attack,
            StatName::SpecialDefense => self.special_defense,
            StatName::Speed => self.speed,
        }
    }

    /// Set a stat
    pub fn set(&mut self, stat: StatName, value: u32) {
        match stat {
            StatName::Hp => self.hp = value,
            StatName::Attack => self.attack = value,
            StatName::Defense => self.defense = value,
            StatName::SpecialAttack => self.special_attack = value,
            StatName::SpecialDefense => self.special_defense = value,
            StatName::Speed => self.speed = value,
        }
    }

    /// Sum of the six stats
    pub fn total(&self) -> u32 {
        StatName::ALL
            .iter()
            .fold(0u32, |acc, s| acc.saturating_add(self.get(*s)))
    }

    /// Stats in API order, paired with their names
    pub fn iter(&self) -> impl Iterator<Item = (StatName, u32)> + '_ {
        StatName::ALL.into_iter().map(move |s| (s, self.get(s)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total() {
        let charizard = BaseStats::new(78, 84, 78, 109, 85, 100);
        assert_eq!(charizard.total(), 534);
        assert_eq!(BaseStats::default().total(), 0);
    }

    #[test]
    fn test_get_set() {
        let mut stats = BaseStats::default();
        stats.set(StatName::SpecialDefense, 90);
        assert_eq!(stats.get(StatName::SpecialDefense), 90);
        assert_eq!(stats.special_defense, 90);
        assert_eq!(stats.total(), 90);
    }

    #[test]
    fn test_iter_order() {
        let stats = BaseStats::new(1, 2, 3, 4, 5, 6);
        let values: Vec<u32> = stats.iter().map(|(_, v)| v).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(stats.iter().next().map(|(s, _)| s), Some(StatName::Hp));
    }

    #[test]
    fn test_total_saturates() {
        let stats = BaseStats::new(u32::MAX, 1, 0, 0, 0, 0);
        assert_eq!(stats.total(), u32::MAX);
    }
}
