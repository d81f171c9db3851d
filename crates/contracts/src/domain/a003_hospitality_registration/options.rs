//! TDCP-ITHM campuses, courses and class schedule

use crate::domain::common::options::ChoiceOption;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Campus {
    Lahore,
    Gujranwala,
    Rawalpindi,
    Faisalabad,
    Multan,
}

/// Help-line entry shown in the contact panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CampusContact {
    pub kind: &'static str,
    pub number: &'static str,
}

const fn cell(number: &'static str) -> CampusContact {
    CampusContact {
        kind: "Cell No",
        number,
    }
}

const LAHORE_CONTACTS: &[CampusContact] = &[
    cell("0300-1404100"),
    cell("0332-6661390"),
    cell("0332-8344561"),
    CampusContact {
        kind: "Landline",
        number: "042-99231348",
    },
    CampusContact {
        kind: "UAN",
        number: "042-111111042",
    },
];
const FAISALABAD_CONTACTS: &[CampusContact] = &[cell("0300-8417307"), cell("0321-7033110")];
const RAWALPINDI_CONTACTS: &[CampusContact] = &[cell("0309-8888756")];
const GUJRANWALA_CONTACTS: &[CampusContact] = &[cell("0310-2333372"), cell("0310-7273372")];
const MULTAN_CONTACTS: &[CampusContact] = &[cell("0308-4291110"), cell("0314-4291110")];

impl Campus {
    pub fn address(&self) -> &'static str {
        match self {
            Campus::Lahore => {
                "TDCP-ITHM Head Office Lahore: 68-Trade Centre Block, M A Johar Town, Lahore. 54782"
            }
            Campus::Gujranwala => {
                "TDCP-ITHM Gujranwala Campus: Building# 121 Satellite Town D Block Near Salamat Hospital"
            }
            Campus::Rawalpindi => "TDCP-ITHM Rawalpindi Campus: 727-F, Satellite Town, Rawalpindi. 46300",
            Campus::Faisalabad => {
                "TDCP-ITHM Faisalabad Campus: 113/5-A, Peoples Colony No.1, Main Jaranwala Road,Faisalabad"
            }
            Campus::Multan => {
                "TDCP-ITHM Multan Campus: Masha Allah Plaza Near Dera Ada Chowk Azmat Wasti Road (opposite Khabrain office,), Multan"
            }
        }
    }

    pub fn contacts(&self) -> &'static [CampusContact] {
        match self {
            Campus::Lahore => LAHORE_CONTACTS,
            Campus::Faisalabad => FAISALABAD_CONTACTS,
            Campus::Rawalpindi => RAWALPINDI_CONTACTS,
            Campus::Gujranwala => GUJRANWALA_CONTACTS,
            Campus::Multan => MULTAN_CONTACTS,
        }
    }

    /// Courses offered here, in catalogue order
    pub fn courses(&self) -> Vec<Course> {
        Course::all()
            .iter()
            .copied()
            .filter(|c| c.offered_at(*self))
            .collect()
    }
}

impl ChoiceOption for Campus {
    fn all() -> &'static [Self] {
        &[
            Campus::Lahore,
            Campus::Gujranwala,
            Campus::Rawalpindi,
            Campus::Faisalabad,
            Campus::Multan,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            Campus::Lahore => "Lahore",
            Campus::Gujranwala => "Gujranwala",
            Campus::Rawalpindi => "Rawalpindi",
            Campus::Faisalabad => "Faisalabad",
            Campus::Multan => "Multan",
        }
    }

    fn label(&self) -> &'static str {
        self.address()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Course {
    CulinaryArts,
    BakingPatisserie,
    BaristaFastFood,
    RetailSkills,
    TravelAirline,
    GuestRelations,
}

impl Course {
    pub fn campuses(&self) -> &'static [Campus] {
        match self {
            Course::CulinaryArts | Course::BakingPatisserie => Campus::all(),
            Course::BaristaFastFood | Course::RetailSkills | Course::TravelAirline => {
                &[Campus::Lahore]
            }
            Course::GuestRelations => &[Campus::Lahore, Campus::Faisalabad, Campus::Rawalpindi],
        }
    }

    pub fn offered_at(&self, campus: Campus) -> bool {
        self.campuses().contains(&campus)
    }
}

impl ChoiceOption for Course {
    fn all() -> &'static [Self] {
        &[
            Course::CulinaryArts,
            Course::BakingPatisserie,
            Course::BaristaFastFood,
            Course::RetailSkills,
            Course::TravelAirline,
            Course::GuestRelations,
        ]
    }

    fn value(&self) -> &'static str {
        match self {
            Course::CulinaryArts => "Culinary Arts",
            Course::BakingPatisserie => "Baking & Patisserie",
            Course::BaristaFastFood => "Barista & Fast Food",
            Course::RetailSkills => "Retail Skills",
            Course::TravelAirline => "Professional Travel & Airline Management",
            Course::GuestRelations => "Guest Relation Officer / Front Desk Officer",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionDays {
    MondayWednesday,
    ThursdaySaturday,
}

impl ChoiceOption for SessionDays {
    fn all() -> &'static [Self] {
        &[SessionDays::MondayWednesday, SessionDays::ThursdaySaturday]
    }

    fn value(&self) -> &'static str {
        match self {
            SessionDays::MondayWednesday => "Monday-Wednesday",
            SessionDays::ThursdaySaturday => "Thursday-Saturday",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            SessionDays::MondayWednesday => "Monday - Wednesday",
            SessionDays::ThursdaySaturday => "Thursday - Saturday",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassTiming {
    Morning,
    Afternoon,
}

impl ChoiceOption for ClassTiming {
    fn all() -> &'static [Self] {
        &[ClassTiming::Morning, ClassTiming::Afternoon]
    }

    fn value(&self) -> &'static str {
        match self {
            ClassTiming::Morning => "09:00am-01:00pm",
            ClassTiming::Afternoon => "01:30pm-05:30pm",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ClassTiming::Morning => "09:00 AM to 01:00 PM",
            ClassTiming::Afternoon => "01:30 PM to 05:30 PM",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courses_per_campus() {
        assert_eq!(Campus::Lahore.courses().len(), 6);
        assert_eq!(
            Campus::Multan.courses(),
            vec![Course::CulinaryArts, Course::BakingPatisserie]
        );
        assert_eq!(Campus::Rawalpindi.courses().len(), 3);
    }

    #[test]
    fn test_every_campus_has_a_contact() {
        for campus in Campus::all() {
            assert!(!campus.contacts().is_empty(), "{:?}", campus);
        }
    }

    #[test]
    fn test_lahore_contacts_include_landline_and_uan() {
        let contacts = Campus::Lahore.contacts();
        assert_eq!(contacts.len(), 5);
        assert_eq!(contacts[0], cell("0300-1404100"));
        assert_eq!(contacts[4].kind, "UAN");
        assert_eq!(Campus::Multan.contacts()[1].number, "0314-4291110");
    }
}
