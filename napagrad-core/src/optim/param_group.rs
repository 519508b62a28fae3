use crate::value::Value;

/// Defines a group of parameters with specific optimizer hyperparameters.
///
/// This allows applying different settings (like learning rate or weight decay)
/// to different parts of a model.
#[derive(Clone, Debug)]
pub struct ParamGroup {
    /// Handles to the parameters in this group. They share their nodes with
    /// the module that owns them.
    pub params: Vec<Value>,

    /// Specific options/hyperparameters for this group.
    pub options: ParamGroupOptions,
}

/// Options specific to a parameter group. `None` falls back to the
/// optimizer-wide setting.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParamGroupOptions {
    pub lr: Option<f64>,
    pub weight_decay: Option<f64>,
    pub momentum: Option<f64>,
}

impl ParamGroup {
    /// Creates a new parameter group with default options.
    pub fn new(params: Vec<Value>) -> Self {
        ParamGroup {
            params,
            options: ParamGroupOptions::default(),
        }
    }

    pub fn with_options(params: Vec<Value>, options: ParamGroupOptions) -> Self {
        ParamGroup { params, options }
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.options.lr = Some(lr);
    }

    pub fn get_lr(&self) -> Option<f64> {
        self.options.lr
    }
}
