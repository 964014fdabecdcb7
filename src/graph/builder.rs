//! Multi-pass graph builder.
//!
//! Six ordered passes over the full record sequence. The order is
//! load-bearing: containers must exist before members can attach to them,
//! and inheritance runs before the finalize pass so the per-kind lists
//! include inherited entries.
//!
//! Individual malformed or dangling records are logged and skipped; only an
//! unreadable input aborts construction (handled by the loader, before the
//! builder runs).

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::model::{
    Container, ContainerId, Member, MemberId, MemberLists, OBJECT_TYPE, SourceMeta, SymbolRef,
    parse_args,
};
use crate::record::RawRecord;

use super::inheritance;
use super::model::DocModel;

/// Build the symbol graph from a flat record sequence.
pub(crate) fn build(records: &[RawRecord]) -> DocModel {
    let mut builder = GraphBuilder::default();

    builder.pass_namespaces(records);
    builder.pass_classes(records);
    builder.pass_link_containers();
    builder.pass_members(records);
    builder.pass_enum_constant_types();

    inheritance::resolve(&mut builder.containers, &builder.container_index);

    builder.pass_finalize();

    debug!(
        "built documentation graph: {} containers, {} members",
        builder.containers.len(),
        builder.members.len()
    );

    builder.into_model()
}

#[derive(Default)]
struct GraphBuilder {
    containers: Vec<Container>,
    members: Vec<Member>,
    container_index: FxHashMap<String, ContainerId>,
    member_index: FxHashMap<String, SymbolRef>,
    /// Constants declared without an explicit type, revisited by pass 5.
    untyped_constants: Vec<MemberId>,
}

impl GraphBuilder {
    // ============================================================
    // Pass 1: namespaces
    // ============================================================

    /// Register every namespace record in both top-level indexes. A
    /// namespace is addressable both as a container and, from its parent's
    /// perspective, as a member.
    fn pass_namespaces(&mut self, records: &[RawRecord]) {
        for record in records {
            if record.kind() != "namespace" {
                continue;
            }
            let namespace = Container::Namespace {
                longname: record.longname().to_string(),
                name: record.name().to_string(),
                help: record.help().to_string(),
                memberof: record.memberof().map(str::to_string),
                meta: SourceMeta::from_record(record.meta.as_ref()),
                members: Default::default(),
                lists: MemberLists::default(),
            };
            self.add_container(namespace);
        }
        debug!("namespace pass: {} containers", self.containers.len());
    }

    // ============================================================
    // Pass 2: classes
    // ============================================================

    fn pass_classes(&mut self, records: &[RawRecord]) {
        for record in records {
            if record.kind() != "class" || record.is_inner() {
                continue;
            }
            let class = Container::Type {
                longname: record.longname().to_string(),
                name: record.name().to_string(),
                help: record.class_help().to_string(),
                memberof: record.memberof().map(str::to_string),
                meta: SourceMeta::from_record(record.meta.as_ref()),
                members: Default::default(),
                lists: MemberLists::default(),
                super_names: record.augments.clone().unwrap_or_default(),
                constructor_args: parse_args(record.params.as_deref()),
                is_enum: false,
                enum_element_types: Vec::new(),
            };
            self.add_container(class);
        }
        debug!("class pass: {} containers", self.containers.len());
    }

    // ============================================================
    // Pass 3: memberof linking
    // ============================================================

    /// Attach each container to its declared parent's member map under its
    /// short name. Parents that do not resolve are reported and skipped.
    fn pass_link_containers(&mut self) {
        for index in 0..self.containers.len() {
            let child = &self.containers[index];
            let Some(memberof) = child.memberof().map(str::to_string) else {
                continue;
            };
            let name = child.name().to_string();
            let child_id = ContainerId::new(index);

            let Some(&parent_id) = self.container_index.get(&memberof) else {
                warn!(
                    "member-of not found: '{}' is member of '{}'",
                    child.longname(),
                    memberof
                );
                continue;
            };

            self.containers[parent_id.index()]
                .members_mut()
                .entry(name)
                .or_insert(SymbolRef::Container(child_id));
        }
    }

    // ============================================================
    // Pass 4: member classification
    // ============================================================

    /// Classify every unfiltered record. A single record may produce both
    /// an enum-type side entry and a normal member entry.
    fn pass_members(&mut self, records: &[RawRecord]) {
        for record in records {
            if record.is_inner() || record.is_private() {
                continue;
            }

            self.build_enum_type(record);

            if !self.build_constant(record) {
                self.build_property(record);
            }

            self.build_method(record);
        }
        debug!("member pass: {} members", self.members.len());
    }

    /// A record flagged `isEnum` materializes a second, member-shaped Type
    /// entry marked as an enum, alongside any normal member entry the same
    /// record produces.
    fn build_enum_type(&mut self, record: &RawRecord) {
        if !record.is_enum() {
            return;
        }

        let enum_type = Container::Type {
            longname: record.longname().to_string(),
            name: record.name().to_string(),
            help: record.help().to_string(),
            memberof: record.memberof().map(str::to_string),
            meta: SourceMeta::from_record(record.meta.as_ref()),
            members: Default::default(),
            lists: MemberLists::default(),
            super_names: Vec::new(),
            constructor_args: Vec::new(),
            is_enum: true,
            enum_element_types: element_types(record),
        };
        let Some(id) = self.add_container(enum_type) else {
            return;
        };

        let Some(memberof) = record.memberof() else {
            return;
        };
        let Some(&parent_id) = self.container_index.get(memberof) else {
            warn!(
                "member-of not found: enum '{}' is member of '{}'",
                record.longname(),
                memberof
            );
            return;
        };
        self.containers[parent_id.index()]
            .members_mut()
            .entry(record.name().to_string())
            .or_insert(SymbolRef::Container(id));
    }

    /// Returns true when the record was classified as a constant, whether
    /// or not it could be attached.
    ///
    /// A `kind == "member"` record with static scope and an all-uppercase
    /// name is promoted to a constant even without an explicit "constant"
    /// kind. Real-world dumps rely on this.
    fn build_constant(&mut self, record: &RawRecord) -> bool {
        let kind = record.kind();
        let name = record.name();

        let mut is_constant = kind == "constant";
        if !is_constant
            && record.is_static_scope()
            && kind == "member"
            && !name.is_empty()
            && name.to_uppercase() == name
        {
            is_constant = true;
        }
        if !is_constant {
            return false;
        }

        let Some(container_id) = self.resolve_memberof(record) else {
            return true;
        };

        let explicit_type = record.type_names().is_some();
        let constant = Member::Constant {
            name: name.to_string(),
            help: record.help().to_string(),
            types: element_types(record),
            is_static: record.is_static_scope(),
            default_value: record.defaultvalue.clone(),
            owner: Some(container_id),
            meta: SourceMeta::from_record(record.meta.as_ref()),
        };
        if let Some(member_id) = self.attach_member(container_id, constant) {
            if !explicit_type {
                self.untyped_constants.push(member_id);
            }
        }
        true
    }

    fn build_property(&mut self, record: &RawRecord) {
        if record.memberof().is_none() {
            return;
        }
        if record.kind() != "member" || record.params.is_some() {
            return;
        }

        let Some(container_id) = self.resolve_memberof(record) else {
            return;
        };

        let property = Member::Property {
            name: record.name().to_string(),
            help: record.help().to_string(),
            types: element_types(record),
            is_static: record.is_static_scope(),
            default_value: record.defaultvalue.clone(),
            read_only: record.readonly.unwrap_or(false),
            owner: Some(container_id),
            meta: SourceMeta::from_record(record.meta.as_ref()),
        };
        self.attach_member(container_id, property);
    }

    fn build_method(&mut self, record: &RawRecord) {
        if record.kind() != "function" {
            return;
        }

        // First returns entry only. An entry lacking a structured type
        // falls back to its free-text description as the sole return type.
        let (return_types, return_help) = match record.returns.as_ref().and_then(|r| r.first()) {
            Some(ret) => {
                let types = match &ret.type_info {
                    Some(info) => info.names.clone(),
                    None => vec![ret.description.clone().unwrap_or_default()],
                };
                (types, ret.description.clone().unwrap_or_default())
            }
            None => (Vec::new(), String::new()),
        };

        let args = parse_args(record.params.as_deref());
        let mut args_by_name = FxHashMap::default();
        for (position, arg) in args.iter().enumerate() {
            // duplicate names collapse, last write wins
            args_by_name.insert(arg.name.clone(), position);
        }

        let Some(container_id) = self.resolve_memberof(record) else {
            return;
        };

        // A method attached to a namespace is necessarily static.
        let is_static =
            record.is_static_scope() || !self.containers[container_id.index()].is_type();

        let method = Member::Method {
            name: record.name().to_string(),
            help: record.help().to_string(),
            is_static,
            args,
            args_by_name,
            return_types,
            return_help,
            owner: Some(container_id),
            meta: SourceMeta::from_record(record.meta.as_ref()),
        };
        self.attach_member(container_id, method);
    }

    // ============================================================
    // Pass 5: missing-type fallback for enum constants
    // ============================================================

    /// A constant with no explicit `type.names` declared on an enum Type
    /// takes the enum's element types instead of the `Object` sentinel.
    fn pass_enum_constant_types(&mut self) {
        for &member_id in &self.untyped_constants {
            let Some(owner) = self.members[member_id.index()].owner() else {
                continue;
            };
            if !self.containers[owner.index()].is_enum() {
                continue;
            }
            let element_types = self.containers[owner.index()].enum_element_types().to_vec();
            if let Member::Constant { types, .. } = &mut self.members[member_id.index()] {
                trace!(
                    "enum constant '{}' takes element types {:?}",
                    self.containers[owner.index()].longname(),
                    element_types
                );
                *types = element_types;
            }
        }
    }

    // ============================================================
    // Pass 6: finalize per-container derived lists
    // ============================================================

    /// Materialize stable per-kind member lists, sorted by member name.
    /// Idempotent: recomputed from the member map, no cross-container
    /// effects.
    fn pass_finalize(&mut self) {
        for index in 0..self.containers.len() {
            let mut lists = MemberLists::default();
            for symbol in self.containers[index].members().values() {
                if let SymbolRef::Member(member_id) = symbol {
                    match &self.members[member_id.index()] {
                        Member::Constant { .. } => lists.constants.push(*member_id),
                        Member::Property { .. } => lists.properties.push(*member_id),
                        Member::Method { .. } => lists.methods.push(*member_id),
                    }
                }
            }
            let by_name =
                |a: &MemberId, b: &MemberId| {
                    self.members[a.index()].name().cmp(self.members[b.index()].name())
                };
            lists.constants.sort_by(by_name);
            lists.properties.sort_by(by_name);
            lists.methods.sort_by(by_name);
            self.containers[index].set_lists(lists);
        }
    }

    // ============================================================
    // Shared plumbing
    // ============================================================

    /// Register a container in both top-level indexes, first writer wins.
    fn add_container(&mut self, container: Container) -> Option<ContainerId> {
        let longname = container.longname().to_string();
        if self.container_index.contains_key(&longname) {
            trace!("container '{longname}' already registered, keeping first");
            return None;
        }
        let id = ContainerId::new(self.containers.len());
        self.containers.push(container);
        self.container_index.insert(longname.clone(), id);
        self.member_index.insert(longname, SymbolRef::Container(id));
        Some(id)
    }

    /// Resolve a record's `memberof` to a known container. A dangling
    /// reference is reported and the record dropped.
    fn resolve_memberof(&self, record: &RawRecord) -> Option<ContainerId> {
        let memberof = record.memberof()?;
        match self.container_index.get(memberof) {
            Some(&id) => Some(id),
            None => {
                warn!(
                    "member-of not found: '{}' is member of '{}'",
                    record.name(),
                    memberof
                );
                None
            }
        }
    }

    /// Attach a member to its declaring container's map and register it in
    /// the global index under `containerLongname + "." + shortName`. First
    /// writer wins; a name the container already holds is left untouched.
    fn attach_member(&mut self, container_id: ContainerId, member: Member) -> Option<MemberId> {
        let name = member.name().to_string();
        let container = &self.containers[container_id.index()];
        if container.members().contains_key(&name) {
            trace!(
                "member '{}.{}' already declared, keeping first",
                container.longname(),
                name
            );
            return None;
        }
        let fq_name = format!("{}.{}", container.longname(), name);

        let id = MemberId::new(self.members.len());
        self.members.push(member);
        self.containers[container_id.index()]
            .members_mut()
            .insert(name, SymbolRef::Member(id));
        self.member_index.insert(fq_name, SymbolRef::Member(id));
        Some(id)
    }

    fn into_model(self) -> DocModel {
        DocModel::new(
            self.containers,
            self.members,
            self.container_index,
            self.member_index,
        )
    }
}

/// Declared type names, or the `Object` sentinel when the record has none.
fn element_types(record: &RawRecord) -> Vec<String> {
    match record.type_names() {
        Some(names) => names.to_vec(),
        None => vec![OBJECT_TYPE.to_string()],
    }
}
