//! One level of a delegation hierarchy.

use alloc::string::String;
use alloc::vec::Vec;

use super::ObjectId;
use super::descriptor::MemberDescriptor;

/// Storage for one object: its own members in declaration order and the
/// level it delegates to.
#[derive(Debug, Clone, Default)]
pub(crate) struct Level {
    pub(crate) label: Option<String>,
    pub(crate) parent: Option<ObjectId>,
    members: Vec<(String, MemberDescriptor)>,
}

impl Level {
    pub(crate) fn new(parent: Option<ObjectId>) -> Self {
        Level {
            label: None,
            parent,
            members: Vec::new(),
        }
    }

    pub(crate) fn get(&self, name: &str) -> Option<&MemberDescriptor> {
        self.members
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    pub(crate) fn get_mut(&mut self, name: &str) -> Option<&mut MemberDescriptor> {
        self.members
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, d)| d)
    }

    /// Redefining keeps the member's original position.
    pub(crate) fn define(&mut self, name: String, descriptor: MemberDescriptor) {
        match self.get_mut(&name) {
            Some(slot) => *slot = descriptor,
            None => self.members.push((name, descriptor)),
        }
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<MemberDescriptor> {
        let index = self.members.iter().position(|(n, _)| n == name)?;
        Some(self.members.remove(index).1)
    }

    pub(crate) fn members(&self) -> &[(String, MemberDescriptor)] {
        &self.members
    }
}
