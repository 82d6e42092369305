//! Preferred outreach channel per provider.

use tracing::{info, info_span};

use hcp_model::{ChannelAffinity, ChannelAssignment, HcpRecord, WritingBehavior};

/// Specialties always reached in person. Matched exactly.
pub const IN_PERSON_SPECIALTIES: [&str; 2] = ["Cardiology", "Oncology"];

pub fn classify_channel(specialty: &str, behavior: WritingBehavior) -> ChannelAffinity {
    if behavior == WritingBehavior::High || IN_PERSON_SPECIALTIES.contains(&specialty) {
        ChannelAffinity::InPerson
    } else {
        ChannelAffinity::Email
    }
}

/// One assignment per record, in iteration order.
pub fn channel_affinity<'a, I>(records: I) -> Vec<ChannelAssignment>
where
    I: IntoIterator<Item = &'a HcpRecord>,
{
    let span = info_span!("channel");
    let _guard = span.enter();

    let assignments: Vec<ChannelAssignment> = records
        .into_iter()
        .map(|record| ChannelAssignment {
            npi_id: record.npi_id.clone(),
            channel_affinity: classify_channel(&record.specialty, record.writing_behavior),
        })
        .collect();

    let in_person = assignments
        .iter()
        .filter(|a| a.channel_affinity == ChannelAffinity::InPerson)
        .count();
    info!(
        in_person,
        email = assignments.len() - in_person,
        "classified channels"
    );
    assignments
}
