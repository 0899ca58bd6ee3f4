//! UI Manager
//!
//! Root owner of the widget tree. Issues widget identities, applies
//! structural changes and drives the per-frame tick:
//! `check_events` -> `update` -> `draw`.

use std::sync::atomic::{AtomicU64, Ordering};

use super::component::Widget;
use super::context::{AttachContext, FrameContext, IdAllocator, TreeRequest};
use super::group::Group;
use super::resources::GuiResources;
use super::triggers::{LinkKey, TriggerEvent, WidgetEvent};
use super::{ManagerId, WidgetId};
use crate::config::{Config, ConfigError, GuiConfig};
use crate::error::{GuiError, GuiResult};
use crate::foundation::math::{Mat4, Vec2};
use crate::input::InputState;
use crate::render::DrawHandles;

static NEXT_MANAGER_ID: AtomicU64 = AtomicU64::new(1);

/// Central widget tree owner
#[derive(Debug)]
pub struct Manager {
    /// Identity handed to every attached widget
    id: ManagerId,

    /// Widget id source
    ids: IdAllocator,

    /// Top-level widgets
    root: Group,

    /// Shared meshes
    resources: GuiResources,

    /// GUI tunables
    config: GuiConfig,

    /// Frame counter, advanced by `check_events`
    frame: u64,
}

impl Manager {
    /// Create a manager around already uploaded resources
    pub fn new(resources: GuiResources, config: GuiConfig) -> Self {
        if let Err(reason) = config.validate() {
            log::warn!("GUI config failed validation, continuing anyway: {}", reason);
        }
        let id = ManagerId(NEXT_MANAGER_ID.fetch_add(1, Ordering::Relaxed));
        log::info!("Created GUI manager {}", id.0);

        Self {
            id,
            ids: IdAllocator::new(),
            root: Group::new(),
            resources,
            config,
            frame: 0,
        }
    }

    /// Create a manager with configuration loaded from a TOML or RON file
    pub fn from_config_file(resources: GuiResources, path: &str) -> GuiResult<Self> {
        let config = GuiConfig::load_from_file(path)?;
        config.validate().map_err(ConfigError::Invalid)?;
        Ok(Self::new(resources, config))
    }

    /// Manager identity
    pub fn id(&self) -> ManagerId {
        self.id
    }

    /// GUI tunables
    pub fn config(&self) -> &GuiConfig {
        &self.config
    }

    /// Shared meshes
    pub fn resources(&self) -> &GuiResources {
        &self.resources
    }

    /// Frames processed so far
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Top-level widgets
    pub fn root(&self) -> &Group {
        &self.root
    }

    /// Number of top-level widgets
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Whether no widget is attached
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Attach a top-level widget; it is drawn last and gets input first
    pub fn add_component(&mut self, mut widget: Box<dyn Widget>) -> WidgetId {
        let mut ctx = AttachContext::new(&mut self.ids, self.id, &self.resources, &self.config);
        let id = ctx.attach(&mut *widget, None, Some(&self.root));
        log::debug!("Added {}", widget.component());
        self.root.add(widget);
        id
    }

    /// Attach a widget inside the child container of `parent`
    pub fn add_child(&mut self, parent: WidgetId, mut widget: Box<dyn Widget>) -> GuiResult<WidgetId> {
        let owner = self.root.find_mut(parent).ok_or(GuiError::WidgetNotFound(parent))?;
        let parent_component = owner.component().clone();
        let siblings = owner.children().ok_or(GuiError::NotAContainer(parent))?;

        let mut ctx = AttachContext::new(&mut self.ids, self.id, &self.resources, &self.config);
        let id = ctx.attach(&mut *widget, Some(&parent_component), Some(siblings));
        log::debug!("Added {} under {}", widget.component(), parent);

        if let Some(group) = owner.children_mut() {
            group.add(widget);
        }
        owner.validate();
        Ok(id)
    }

    /// Remove a widget from anywhere in the tree
    ///
    /// Returns false (and logs) when the widget is not attached.
    pub fn remove_component(&mut self, id: WidgetId) -> bool {
        match self.take_component(id) {
            Ok(_) => true,
            Err(err) => {
                log::error!("Failed to remove widget: {}", err);
                false
            }
        }
    }

    /// Remove a widget and hand it back to the caller
    pub fn take_component(&mut self, id: WidgetId) -> GuiResult<Box<dyn Widget>> {
        let Some(widget) = self.root.remove(id) else {
            return Err(if self.root.contains_id(id) {
                GuiError::FixedPart(id)
            } else {
                GuiError::WidgetNotFound(id)
            });
        };
        log::debug!("Removed {}", widget.component());
        Ok(widget)
    }

    /// Dispatch this frame's input; returns true if a widget consumed it
    pub fn check_events(&mut self, input: &dyn InputState) -> bool {
        self.frame += 1;
        let mut requests = Vec::new();
        let consumed = {
            let mut ctx = FrameContext::new(input, self.frame, &mut requests);
            self.root.check_events(&mut ctx)
        };
        self.apply_requests(requests);
        consumed
    }

    /// Recompute transient state (drag-follow, resize, color flashes)
    pub fn update(&mut self, input: &dyn InputState) {
        let mut requests = Vec::new();
        {
            let mut ctx = FrameContext::new(input, self.frame, &mut requests);
            self.root.update(&mut ctx);
        }
        self.apply_requests(requests);
    }

    /// Draw every visible widget back to front
    pub fn draw(&self, handles: &mut dyn DrawHandles) {
        self.root.draw(handles, &Mat4::identity());
    }

    /// One full frame: `check_events`, `update`, `draw`
    pub fn tick(&mut self, input: &dyn InputState, handles: &mut dyn DrawHandles) -> bool {
        let consumed = self.check_events(input);
        self.update(input);
        self.draw(handles);
        consumed
    }

    fn apply_requests(&mut self, requests: Vec<TreeRequest>) {
        for request in requests {
            match request {
                TreeRequest::Remove(id) => {
                    self.remove_component(id);
                }
            }
        }
    }

    /// Look up a widget anywhere in the tree
    pub fn find(&self, id: WidgetId) -> Option<&(dyn Widget + 'static)> {
        self.root.find(id)
    }

    /// Mutable lookup
    pub fn find_mut(&mut self, id: WidgetId) -> Option<&mut (dyn Widget + 'static)> {
        self.root.find_mut(id)
    }

    /// Typed lookup
    pub fn find_as<T: Widget>(&self, id: WidgetId) -> Option<&T> {
        self.find(id)?.downcast_ref::<T>()
    }

    /// Typed mutable lookup
    pub fn find_as_mut<T: Widget>(&mut self, id: WidgetId) -> Option<&mut T> {
        self.find_mut(id)?.downcast_mut::<T>()
    }

    /// Look up a widget by its (unique) name
    pub fn find_by_name(&self, name: &str) -> Option<&(dyn Widget + 'static)> {
        self.root.find_by_name(name)
    }

    /// Position of a widget in surface space
    pub fn absolute_position(&self, id: WidgetId) -> Option<Vec2> {
        let chain = self.root.ancestry(id)?;
        Some(chain.iter().fold(Vec2::zeros(), |sum, position| sum + position))
    }

    /// Hit test a widget against a surface-space pointer
    pub fn is_inside(&self, id: WidgetId, pointer: &Vec2) -> bool {
        let (Some(chain), Some(widget)) = (self.root.ancestry(id), self.find(id)) else {
            return false;
        };
        let origin = chain
            .iter()
            .take(chain.len().saturating_sub(1))
            .fold(Vec2::zeros(), |sum, position| sum + position);
        widget.component().is_inside(&origin, pointer)
    }

    /// Register a callback on a widget's event
    pub fn link(
        &mut self,
        id: WidgetId,
        event: WidgetEvent,
        callback: impl FnMut(&TriggerEvent) + 'static,
    ) -> GuiResult<LinkKey> {
        let widget = self.root.find_mut(id).ok_or(GuiError::WidgetNotFound(id))?;
        let triggers = widget.triggers_mut().ok_or(GuiError::NoTriggers(id))?;
        Ok(triggers.link(event, callback))
    }

    /// Register a callback using the event's name
    pub fn link_named(
        &mut self,
        id: WidgetId,
        event: &str,
        callback: impl FnMut(&TriggerEvent) + 'static,
    ) -> GuiResult<LinkKey> {
        let event = event.parse::<WidgetEvent>()?;
        self.link(id, event, callback)
    }

    /// Remove a previously linked callback
    pub fn unlink(&mut self, id: WidgetId, key: LinkKey) -> bool {
        self.root
            .find_mut(id)
            .and_then(|widget| widget.triggers_mut())
            .is_some_and(|triggers| triggers.unlink(key))
    }

    /// Draw a widget one step later within its group
    pub fn bring_forward(&mut self, id: WidgetId) -> bool {
        self.root.bring_forward(id)
    }

    /// Draw a widget one step earlier within its group
    pub fn bring_backward(&mut self, id: WidgetId) -> bool {
        self.root.bring_backward(id)
    }

    /// Draw a widget last within its group
    pub fn bring_to_front(&mut self, id: WidgetId) -> bool {
        self.root.bring_to_front(id)
    }
}
