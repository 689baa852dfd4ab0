use crate::models::ucsb_organization::UcsbOrganization;

pub fn one_organization() -> UcsbOrganization {
    UcsbOrganization {
        org_code: "KFC".into(),
        org_translation_short: "KF NOC".into(),
        org_translation: "RKFC".into(),
        inactive: "false".into(),
    }
}

pub fn three_organizations() -> Vec<UcsbOrganization> {
    vec![
        UcsbOrganization {
            org_code: "KFC".into(),
            org_translation_short: "KF NOC".into(),
            org_translation: "RKFC".into(),
            inactive: "false".into(),
        },
        UcsbOrganization {
            org_code: "IOSS".into(),
            org_translation_short: "ONE SHOP".into(),
            org_translation: "IN ONE STOP SHOP".into(),
            inactive: "false".into(),
        },
        UcsbOrganization {
            org_code: "ASD".into(),
            org_translation_short: "ASD".into(),
            org_translation: "ASD".into(),
            inactive: "true".into(),
        },
    ]
}
