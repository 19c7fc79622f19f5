//! Builtin heritage-site records.
//!
//! Single source of truth for the shipped catalog, used by both the listing
//! and AR commands so the two can never disagree.

use crate::types::{HeritageSite, SiteHistory};

/// The records shipped with the crate.
pub fn builtin_sites() -> Vec<HeritageSite> {
    vec![
        HeritageSite {
            id: 0,
            title: "Kedarnath Temple".to_string(),
            location: "Uttarakhand, India".to_string(),
            year: "8th Century".to_string(),
            image: "https://images.unsplash.com/photo-1649147313351-c86537fda0eb?w=1080".to_string(),
            description: "One of the twelve Jyotirlingas of Lord Shiva, located at an altitude of 3,583 meters in the Garhwal Himalayas. A sacred pilgrimage site rebuilt after the 2013 floods.".to_string(),
            category: "Hindu Temple".to_string(),
            unesco: false,
            ar_url: Some("https://templeexplorer-ar.vercel.app/kedarnath".to_string()),
            elevation: Some("3,583 m".to_string()),
            built: None,
            history: Some(SiteHistory {
                ancient: "The Kedarnath temple is believed to be over 1,000 years old, though its origins trace back to ancient times when the Pandavas from the Mahabharata sought Lord Shiva's blessings here.".to_string(),
                construction: "The present temple structure was built by Adi Shankaracharya in the 8th century CE, constructed using large stone slabs without the use of any mortar.".to_string(),
                significance: "It is one of the twelve Jyotirlingas dedicated to Lord Shiva and is part of the Panch Kedar pilgrimage circuit in the Himalayas.".to_string(),
                legend: "According to legend, after the Kurukshetra war, the Pandavas sought Lord Shiva's forgiveness. Shiva, wanting to avoid them, took the form of a bull. When found, he disappeared into the ground, leaving behind his hump, which is worshipped at Kedarnath.".to_string(),
                architecture: "The temple showcases remarkable ancient Indian architecture with massive stone slabs, conical-shaped lingam, and intricate carvings that have withstood centuries of harsh Himalayan weather.".to_string(),
                modern_history: "The temple suffered significant damage during the 2013 Uttarakhand floods but was restored and continues to be a major pilgrimage destination, opening only during the summer months due to extreme winter conditions.".to_string(),
            }),
        },
        HeritageSite {
            id: 1,
            title: "Jagannath Temple".to_string(),
            location: "Puri, Odisha, India".to_string(),
            year: "12th Century".to_string(),
            image: "https://images.unsplash.com/photo-1726220063675-1ac64be1d7d5?w=1080".to_string(),
            description: "Famous for the annual Rath Yatra festival, this temple is dedicated to Lord Jagannath. Known for its towering spire and unique wooden deities that are replaced every 12-19 years.".to_string(),
            category: "Hindu Temple".to_string(),
            unesco: false,
            ar_url: Some("https://templeexplorer-ar.vercel.app/jagannath".to_string()),
            elevation: None,
            built: Some("12th Century".to_string()),
            history: Some(SiteHistory {
                ancient: "The Jagannath Temple in Puri dates back to the 12th century and is dedicated to Lord Jagannath, a form of Lord Krishna. The temple has been a center of devotion for over 900 years.".to_string(),
                construction: "Built by King Anantavarman Chodaganga Deva of the Eastern Ganga Dynasty around 1135 CE, the temple took several decades to complete under subsequent rulers.".to_string(),
                significance: "It is one of the four sacred Char Dham pilgrimage sites for Hindus and is famous for the annual Rath Yatra (Chariot Festival), where the deities are taken out in massive wooden chariots.".to_string(),
                legend: "The legend states that Lord Krishna instructed King Indradyumna to build the temple after finding the deity's image floating in the sea. The wooden idols are replaced every 12-19 years in a secret ceremony called Nabakalebara.".to_string(),
                architecture: "The temple features stunning Kalinga architecture with a 65-meter tall main spire (shikhara), elaborate carvings, and the famous Chakra (wheel) on top that can be seen from great distances.".to_string(),
                modern_history: "The temple continues to attract millions of devotees annually. The Rath Yatra festival, where devotees pull the chariots of Lord Jagannath, Balabhadra, and Subhadra, is celebrated with great fervor and draws international attention.".to_string(),
            }),
        },
        HeritageSite {
            id: 2,
            title: "Konark Sun Temple".to_string(),
            location: "Odisha, India".to_string(),
            year: "13th Century".to_string(),
            image: "https://images.unsplash.com/photo-1639980290886-6bdd61c7582b?w=1080".to_string(),
            description: "Designed as a colossal chariot with 24 carved stone wheels, this temple is dedicated to the Sun god Surya. A masterpiece of Kalinga architecture and UNESCO World Heritage Site.".to_string(),
            category: "Hindu Temple".to_string(),
            unesco: true,
            ar_url: Some("https://templeexplorer-ar.vercel.app/konark".to_string()),
            elevation: None,
            built: Some("13th Century".to_string()),
            history: Some(SiteHistory {
                ancient: "The Konark Sun Temple, also known as the Black Pagoda, was built in the 13th century (around 1250 CE) and is dedicated to the Hindu Sun God, Surya.".to_string(),
                construction: "Commissioned by King Narasimhadeva I of the Eastern Ganga Dynasty, the temple took 12 years to build and employed over 12,000 artisans and craftsmen.".to_string(),
                significance: "The temple is designed as a massive chariot with 24 wheels, pulled by seven horses, representing the Sun God's chariot that carries him across the sky. It's a UNESCO World Heritage Site since 1984.".to_string(),
                legend: "Local legends speak of the temple's main attraction - a powerful magnet at the top that could pull ships from the sea. The temple was also said to have been built by Samba, son of Lord Krishna, to cure himself of leprosy.".to_string(),
                architecture: "The temple exemplifies Kalinga architecture with intricate stone carvings depicting the wheel of time, celestial beings, animals, and erotic sculptures. The wheels function as sundials, accurately telling time by their shadows.".to_string(),
                modern_history: "Much of the temple is now in ruins due to natural disasters and invasions, but its architectural grandeur continues to inspire visitors. Conservation efforts by the Archaeological Survey of India help preserve this magnificent monument for future generations.".to_string(),
            }),
        },
        HeritageSite {
            id: 3,
            title: "Meenakshi Temple".to_string(),
            location: "Madurai, Tamil Nadu, India".to_string(),
            year: "6th Century".to_string(),
            image: "https://images.unsplash.com/photo-1692173248120-59547c3d4653?w=1080".to_string(),
            description: "A historic Hindu temple dedicated to Parvati and Shiva. Famous for its colorful gopurams (towering gateways) with intricate sculptures and vibrant artwork.".to_string(),
            category: "Hindu Temple".to_string(),
            unesco: false,
            ar_url: Some("https://templeexplorer-ar.vercel.app/meenakshi".to_string()),
            elevation: None,
            built: Some("6th Century".to_string()),
            history: Some(SiteHistory {
                ancient: "The Meenakshi Temple has ancient origins dating back to the 6th century CE, built around a sacred lingam discovered by King Malayadhwaja Pandya.".to_string(),
                construction: "The current structure was largely rebuilt in the 14th century by the Nayak rulers, particularly during the reign of King Thirumalai Nayak.".to_string(),
                significance: "The temple is dedicated to Goddess Meenakshi (Parvati) and Lord Sundareshwar (Shiva) and is considered one of the most important temples in Tamil Nadu.".to_string(),
                legend: "According to legend, Princess Meenakshi was born with three breasts, and it was prophesied that her third breast would disappear when she met her future husband, which happened when she encountered Lord Shiva.".to_string(),
                architecture: "The temple complex covers 45 acres and features 14 towering gopurams with thousands of colorful sculptures depicting gods, goddesses, demons, and mortals in intricate detail.".to_string(),
                modern_history: "The temple continues to be a major pilgrimage site and cultural center, hosting the annual Meenakshi Thirukalyanam festival celebrating the divine marriage of Meenakshi and Sundareshwar.".to_string(),
            }),
        },
        HeritageSite {
            id: 4,
            title: "Golden Temple".to_string(),
            location: "Amritsar, Punjab, India".to_string(),
            year: "16th Century".to_string(),
            image: "https://images.unsplash.com/photo-1623059508779-2542c6e83753?w=1080".to_string(),
            description: "The holiest Sikh shrine, known as Harmandir Sahib. This golden temple sits in the middle of a sacred pool and welcomes people of all faiths.".to_string(),
            category: "Sikh Temple".to_string(),
            unesco: false,
            ar_url: Some("https://templeexplorer-ar.vercel.app/golden-temple".to_string()),
            elevation: None,
            built: Some("16th Century".to_string()),
            history: Some(SiteHistory {
                ancient: "The Golden Temple was founded in 1577 by the fourth Sikh Guru, Guru Ram Das, who excavated the sacred pool (Amrit Sarovar) that gives Amritsar its name.".to_string(),
                construction: "The temple was built by the fifth Sikh Guru, Guru Arjan, in 1604. The current golden structure was created in the early 19th century when Maharaja Ranjit Singh covered the upper floors with gold.".to_string(),
                significance: "It is the holiest shrine in Sikhism and embodies the Sikh principles of equality, humility, and service to humanity, welcoming people of all castes, creeds, and religions.".to_string(),
                legend: "The site is believed to have healing powers due to the sacred waters of the Amrit Sarovar. Many pilgrims come to bathe in these waters seeking spiritual purification.".to_string(),
                architecture: "The temple features a unique blend of Hindu and Islamic architectural styles, with its golden dome, white marble lower level, and intricate inlay work reflecting both traditions.".to_string(),
                modern_history: "The temple serves free meals (langar) to over 100,000 people daily and continues to be a symbol of Sikh hospitality, equality, and devotion to service.".to_string(),
            }),
        },
        HeritageSite {
            id: 5,
            title: "Khajuraho Temples".to_string(),
            location: "Madhya Pradesh, India".to_string(),
            year: "10th Century".to_string(),
            image: "https://images.unsplash.com/photo-1722709229926-b85e2e5e11eb?w=1080".to_string(),
            description: "A UNESCO World Heritage site famous for its stunning architecture and intricate stone carvings. These temples represent the pinnacle of medieval Indian art.".to_string(),
            category: "Hindu Temple".to_string(),
            unesco: true,
            ar_url: Some("https://templeexplorer-ar.vercel.app/khajuraho".to_string()),
            elevation: None,
            built: Some("10th Century".to_string()),
            history: Some(SiteHistory {
                ancient: "The Khajuraho temples were built between 885 and 1050 CE during the reign of the Chandela dynasty, representing the zenith of medieval Indian temple architecture.".to_string(),
                construction: "Originally, there were 85 temples spread over 20 square kilometers, built by various Chandela rulers including Yashovarman, Dhanga, and Vidyadhara.".to_string(),
                significance: "These temples are dedicated to Hindu deities and Jain Tirthankaras, showcasing religious tolerance and artistic excellence. They are UNESCO World Heritage Sites since 1986.".to_string(),
                legend: "According to legend, the temples were built by Hemavati, a beautiful woman seduced by the moon god, whose son Chandravarman founded the Chandela dynasty.".to_string(),
                architecture: "The temples are famous for their nagara-style architecture and intricate sculptures depicting various aspects of life including spiritual, royal, and erotic themes, representing the complete human experience.".to_string(),
                modern_history: "Rediscovered in the 19th century after being hidden in forests for centuries, only 25 temples survive today. They continue to attract visitors worldwide for their artistic and architectural significance.".to_string(),
            }),
        },
    ]
}

/// All records in listing order.
pub fn featured_sites() -> Vec<HeritageSite> {
    builtin_sites()
}

/// Records that carry an AR experience link.
pub fn ar_sites() -> Vec<HeritageSite> {
    builtin_sites()
        .into_iter()
        .filter(|site| site.is_ar_ready())
        .collect()
}

/// Look up a record by id.
pub fn site_by_id(id: u32) -> Option<HeritageSite> {
    builtin_sites().into_iter().find(|site| site.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_shape() {
        let sites = builtin_sites();
        assert_eq!(sites.len(), 6);

        // Ids are unique and match the record positions listings index by.
        for (index, site) in sites.iter().enumerate() {
            assert_eq!(site.id as usize, index);
        }

        // The featured listing is the whole catalog in the same order.
        assert_eq!(featured_sites(), sites);
    }

    #[test]
    fn test_every_builtin_site_is_complete() {
        for site in builtin_sites() {
            assert!(!site.title.is_empty());
            assert!(!site.description.is_empty());
            assert!(site.has_history(), "{} lacks history", site.title);
            assert!(site.is_ar_ready(), "{} lacks an AR link", site.title);
            assert!(site.period_or_elevation().is_some(), "{}", site.title);
        }
    }

    #[test]
    fn test_unesco_flags() {
        let sites = builtin_sites();
        let unesco: Vec<&str> = sites
            .iter()
            .filter(|s| s.unesco)
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(unesco, vec!["Konark Sun Temple", "Khajuraho Temples"]);
    }

    #[test]
    fn test_site_by_id() {
        let konark = site_by_id(2).unwrap();
        assert_eq!(konark.title, "Konark Sun Temple");

        assert!(site_by_id(99).is_none());
    }

    #[test]
    fn test_ar_sites_matches_filter() {
        // All builtin records are AR-ready today; the filter still has to hold
        // once a record without a link is added.
        let ar = ar_sites();
        assert_eq!(ar.len(), builtin_sites().len());
        assert!(ar.iter().all(|site| site.is_ar_ready()));
    }
}
