//! Parameter synthesis for the rewritten function.
//!
//! Each container (`props`, `context`) becomes either a destructuring pattern
//! naming exactly the keys the class read, or a plain parameter when the
//! container is used as a value. Local names avoid every identifier the class
//! already uses.

use gesso_carton::{format_compact, is_identifier_name, CompactString, FxHashSet};
use gesso_croquis::{AccessSite, Container, ContainerAccess, InstanceUsage, ThisDestructure};
use oxc_span::Span;

use crate::RewriteError;

/// Highest numeric suffix tried when freeing a name.
const MAX_SUFFIX: u32 = 99;

/// How one container is bound in the function signature.
#[derive(Debug)]
enum Binding {
    Unused,
    /// Key to local name, in parameter order
    Keys(Vec<(CompactString, CompactString)>),
    Whole(CompactString),
}

/// The synthesized parameter list and how to rewrite accesses against it.
#[derive(Debug)]
pub(crate) struct Signature {
    props: Binding,
    context: Binding,
    /// Destructure statements folded into the parameter list
    consumed: FxHashSet<u32>,
}

impl Signature {
    pub(crate) fn synthesize(
        usage: &InstanceUsage,
        class_name: &str,
    ) -> Result<Self, RewriteError> {
        let mut whole = [needs_whole(&usage.props), needs_whole(&usage.context)];

        // A destructure that cannot be dropped needs every container it names as
        // a value, so the `this` it reads from can be replaced.
        let mut changed = true;
        while changed {
            changed = false;
            for destructure in &usage.destructures {
                if !destructure.consumable {
                    continue;
                }
                let any_whole = destructure.containers.iter().any(|c| whole[index(*c)]);
                for container in &destructure.containers {
                    if any_whole && !whole[index(*container)] {
                        whole[index(*container)] = true;
                        changed = true;
                    }
                }
            }
        }

        let mut taken: FxHashSet<CompactString> = usage.identifiers.clone();
        taken.insert(CompactString::new(class_name));

        let mut consumed = FxHashSet::default();
        let mut fixed: FxHashSet<(Container, CompactString)> = FxHashSet::default();
        for destructure in &usage.destructures {
            if !destructure.consumable {
                continue;
            }
            let removable = destructure.containers.iter().all(|c| !whole[index(*c)]);
            for (container, key) in &destructure.bindings {
                taken.insert(key.clone());
                if removable {
                    fixed.insert((*container, key.clone()));
                }
            }
            if removable {
                consumed.insert(destructure.init.start);
            }
        }

        let props = bind(Container::Props, &usage.props, whole[0], &fixed, &mut taken)?;
        let context = bind(Container::Context, &usage.context, whole[1], &fixed, &mut taken)?;
        let props = match (props, &context) {
            // A second parameter still needs a first one
            (Binding::Unused, Binding::Keys(_) | Binding::Whole(_)) => {
                Binding::Whole(free_name("props", &mut taken)?)
            }
            (props, _) => props,
        };

        Ok(Self {
            props,
            context,
            consumed,
        })
    }

    /// Parameter list, without the parentheses.
    pub(crate) fn params(&self) -> String {
        [&self.props, &self.context]
            .into_iter()
            .filter_map(|binding| match binding {
                Binding::Unused => None,
                Binding::Whole(name) => Some(name.to_string()),
                Binding::Keys(keys) => Some(pattern(keys)),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Replacement for one `this.props...` access.
    pub(crate) fn replacement(&self, site: &AccessSite) -> Option<(Span, String)> {
        match (self.binding(site.container), &site.key) {
            (Binding::Keys(keys), Some(key)) => keys
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, local)| (site.span, local.to_string())),
            (Binding::Whole(name), _) => Some((site.container_span, name.to_string())),
            _ => None,
        }
    }

    /// Whether a destructure statement is folded into the parameters.
    pub(crate) fn is_consumed(&self, destructure: &ThisDestructure) -> bool {
        self.consumed.contains(&destructure.init.start)
    }

    /// Object literal standing in for `this` in a kept destructure.
    pub(crate) fn instance_object(&self, destructure: &ThisDestructure) -> String {
        let fields: Vec<String> = destructure
            .containers
            .iter()
            .filter_map(|container| match self.binding(*container) {
                Binding::Whole(name) if name == container.name() => Some(name.to_string()),
                Binding::Whole(name) => Some(format!("{}: {name}", container.name())),
                _ => None,
            })
            .collect();
        format!("{{ {} }}", fields.join(", "))
    }

    fn binding(&self, container: Container) -> &Binding {
        match container {
            Container::Props => &self.props,
            Container::Context => &self.context,
        }
    }
}

#[inline]
fn index(container: Container) -> usize {
    match container {
        Container::Props => 0,
        Container::Context => 1,
    }
}

/// Keys that cannot be written as bindings force the plain parameter.
fn needs_whole(access: &ContainerAccess) -> bool {
    match access {
        ContainerAccess::Whole => true,
        ContainerAccess::Keys(keys) => keys.iter().any(|key| !is_identifier_name(key)),
        ContainerAccess::Unused => false,
    }
}

fn bind(
    container: Container,
    access: &ContainerAccess,
    whole: bool,
    fixed: &FxHashSet<(Container, CompactString)>,
    taken: &mut FxHashSet<CompactString>,
) -> Result<Binding, RewriteError> {
    if whole {
        return Ok(Binding::Whole(free_name(container.name(), taken)?));
    }
    let ContainerAccess::Keys(keys) = access else {
        return Ok(Binding::Unused);
    };
    let mut bound = Vec::with_capacity(keys.len());
    for key in keys {
        let local = if fixed.contains(&(container, key.clone())) {
            key.clone()
        } else {
            free_name(key, taken)?
        };
        bound.push((key.clone(), local));
    }
    Ok(Binding::Keys(bound))
}

/// `base`, or `base2`, `base3`, ... whichever is free first. The result is
/// marked as taken.
fn free_name(
    base: &str,
    taken: &mut FxHashSet<CompactString>,
) -> Result<CompactString, RewriteError> {
    if !taken.contains(base) {
        let name = CompactString::new(base);
        taken.insert(name.clone());
        return Ok(name);
    }
    for suffix in 2..=MAX_SUFFIX {
        let candidate = format_compact!("{base}{suffix}");
        if !taken.contains(&candidate) {
            taken.insert(candidate.clone());
            return Ok(candidate);
        }
    }
    Err(RewriteError::NameCollision {
        name: CompactString::new(base),
    })
}

fn pattern(keys: &[(CompactString, CompactString)]) -> String {
    let fields: Vec<String> = keys
        .iter()
        .map(|(key, local)| {
            if key == local {
                key.to_string()
            } else {
                format!("{key}: {local}")
            }
        })
        .collect();
    format!("{{ {} }}", fields.join(", "))
}
