/// Index of a component inside its [`ComponentTree`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentId(usize);

/// Type of a node of the project tree
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentType {
    Project,
    Directory,
    File,
}

impl std::str::FromStr for ComponentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "project" => Ok(ComponentType::Project),
            "directory" | "dir" => Ok(ComponentType::Directory),
            "file" => Ok(ComponentType::File),
            _ => Err(format!("Unknown component type: {}", s)),
        }
    }
}

/// One node of the project tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    key: String,
    uuid: String,
    name: String,
    component_type: ComponentType,
    project_version: Option<String>,
    children: Vec<ComponentId>,
}

impl Component {
    pub fn new(
        key: impl Into<String>,
        uuid: impl Into<String>,
        name: impl Into<String>,
        component_type: ComponentType,
    ) -> Self {
        Self {
            key: key.into(),
            uuid: uuid.into(),
            name: name.into(),
            component_type,
            project_version: None,
            children: Vec::new(),
        }
    }

    pub fn with_project_version(mut self, version: impl Into<String>) -> Self {
        self.project_version = Some(version.into());
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn component_type(&self) -> ComponentType {
        self.component_type
    }

    pub fn project_version(&self) -> Option<&str> {
        self.project_version.as_deref()
    }

    pub fn children(&self) -> &[ComponentId] {
        &self.children
    }

    /// Files are the leaves of the tree
    pub fn is_leaf(&self) -> bool {
        self.component_type == ComponentType::File
    }
}

/// Read-only project tree stored as an arena; the root is always the first node
#[derive(Debug, Clone)]
pub struct ComponentTree {
    nodes: Vec<Component>,
}

impl ComponentTree {
    pub fn new(root: Component) -> Self {
        Self { nodes: vec![root] }
    }

    pub fn root_id(&self) -> ComponentId {
        ComponentId(0)
    }

    pub fn root(&self) -> &Component {
        &self.nodes[0]
    }

    /// Returns the component for an id handed out by this tree
    pub fn get(&self, id: ComponentId) -> &Component {
        &self.nodes[id.0]
    }

    /// Attaches `child` under `parent` and returns the id of the new node
    pub fn add_child(&mut self, parent: ComponentId, child: Component) -> ComponentId {
        let id = ComponentId(self.nodes.len());
        self.nodes.push(child);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Visits every leaf in post-order (children before their parent, siblings in insertion order)
    ///
    /// The walk uses an explicit stack so deep trees cannot overflow the call stack.
    pub fn visit_leaves<F>(&self, mut visitor: F)
    where
        F: FnMut(ComponentId, &Component),
    {
        // (node, children already pushed)
        let mut stack = vec![(self.root_id(), false)];
        while let Some((id, expanded)) = stack.pop() {
            let component = self.get(id);
            if expanded || component.children.is_empty() {
                if component.is_leaf() {
                    visitor(id, component);
                }
                continue;
            }
            stack.push((id, true));
            for child in component.children.iter().rev() {
                stack.push((*child, false));
            }
        }
    }
}
