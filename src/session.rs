use crate::derive::DerivationTracker;
use crate::engine::{compute, CalculationResult};
use crate::logic::LogicConfig;
use crate::model::{InputParameters, MethanolInputMode};
use crate::store::{self, KeyValueStore, StoreError};

/// 한 사용자의 편집 세션. 입력값, 계수, 파생 규칙 추적 상태를 함께 소유한다.
///
/// 입력을 고칠 때마다 파생 규칙이 먼저 돌고, 결과는 요청할 때 새로 계산한다.
#[derive(Debug, Clone)]
pub struct Session {
    inputs: InputParameters,
    logic: LogicConfig,
    tracker: DerivationTracker,
}

impl Session {
    pub fn new(inputs: InputParameters, logic: LogicConfig) -> Self {
        let tracker = DerivationTracker::new(&inputs);
        Self {
            inputs,
            logic,
            tracker,
        }
    }

    /// 기본 입력값과 저장소의 계수로 세션을 연다.
    pub fn load(store: &dyn KeyValueStore) -> Self {
        Self::new(InputParameters::default(), store::load_logic(store))
    }

    pub fn inputs(&self) -> &InputParameters {
        &self.inputs
    }

    pub fn logic(&self) -> &LogicConfig {
        &self.logic
    }

    /// 계수는 바로 계산에 반영되지만 `save_logic` 전까지 저장되지 않는다.
    pub fn logic_mut(&mut self) -> &mut LogicConfig {
        &mut self.logic
    }

    /// 입력을 수정하고 파생 규칙을 동기적으로 적용한다. 규칙이 실행되었으면 true.
    pub fn edit<F>(&mut self, f: F) -> bool
    where
        F: FnOnce(&mut InputParameters),
    {
        f(&mut self.inputs);
        self.tracker.sync(&mut self.inputs, &self.logic)
    }

    /// 입력 전체를 교체한다(시나리오 파일 로드 등). 새 입력은 이미 정리된 것으로 본다.
    pub fn replace_inputs(&mut self, inputs: InputParameters) {
        self.tracker = DerivationTracker::new(&inputs);
        self.inputs = inputs;
    }

    /// 현재 소비량을 옮겨 적으며 메탄올 입력 방식을 바꾼다.
    pub fn switch_methanol_input_mode(&mut self, mode: MethanolInputMode) -> bool {
        let logic = self.logic.clone();
        self.edit(|inputs| inputs.switch_methanol_input_mode(mode, &logic))
    }

    pub fn result(&self) -> CalculationResult {
        compute(&self.inputs, &self.logic)
    }

    /// 버전을 올려 저장한다.
    pub fn save_logic(&mut self, store: &mut dyn KeyValueStore) -> Result<&LogicConfig, StoreError> {
        self.logic = store::save_logic(store, &self.logic)?;
        Ok(&self.logic)
    }

    /// 계수를 기본값으로 되돌린다. 저장하지는 않는다.
    pub fn reset_logic(&mut self) {
        self.logic = LogicConfig::default();
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(InputParameters::default(), LogicConfig::default())
    }
}
