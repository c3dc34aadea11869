//! Wire layouts of the structures reachable from the call table.
//!
//! Field order is wire order. Extensible structures carry their `sType` in `s_type`; the codec
//! reads the tag and the extension-chain length before the listed fields.

use crate::names::*;
use crate::stream::{IntSpec, StringEncoding};
use crate::types::{FieldSpec as F, HandleType as H, StructSchema};

const fn bool32(name: &'static str) -> F {
    F::u32(name)
}

const fn size(name: &'static str) -> F {
    F::int(name, IntSpec::SIZE)
}

const fn bytes(name: &'static str) -> F {
    F::int(name, IntSpec::U8)
}

const fn name_list(name: &'static str, count: &'static str) -> F {
    F::string(name, StringEncoding::LengthPrefixed).counted_by(count)
}

pub static ALLOCATION_CALLBACKS: StructSchema = StructSchema {
    name: "VkAllocationCallbacks",
    s_type: None,
    fields: &[
        F::u64("pUserData").optional(),
        F::u64("pfnAllocation"),
        F::u64("pfnReallocation"),
        F::u64("pfnFree"),
        F::u64("pfnInternalAllocation"),
        F::u64("pfnInternalFree"),
    ],
};

pub static APPLICATION_INFO: StructSchema = StructSchema {
    name: "VkApplicationInfo",
    s_type: Some(0),
    fields: &[
        F::string("pApplicationName", StringEncoding::LengthPrefixed).optional(),
        F::u32("applicationVersion"),
        F::string("pEngineName", StringEncoding::LengthPrefixed).optional(),
        F::u32("engineVersion"),
        F::u32("apiVersion"),
    ],
};

pub static INSTANCE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkInstanceCreateInfo",
    s_type: Some(1),
    fields: &[
        F::u32("flags"),
        F::structure("pApplicationInfo", &APPLICATION_INFO).optional(),
        F::u32("enabledLayerCount"),
        name_list("ppEnabledLayerNames", "enabledLayerCount"),
        F::u32("enabledExtensionCount"),
        name_list("ppEnabledExtensionNames", "enabledExtensionCount"),
    ],
};

pub static DEVICE_QUEUE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkDeviceQueueCreateInfo",
    s_type: Some(2),
    fields: &[
        F::flags("flags", &QUEUE_CREATE),
        F::u32("queueFamilyIndex"),
        F::u32("queueCount"),
        F::f32("pQueuePriorities").counted_by("queueCount"),
    ],
};

pub static PHYSICAL_DEVICE_FEATURES: StructSchema = StructSchema {
    name: "VkPhysicalDeviceFeatures",
    s_type: None,
    fields: &[
        bool32("robustBufferAccess"),
        bool32("fullDrawIndexUint32"),
        bool32("imageCubeArray"),
        bool32("independentBlend"),
        bool32("geometryShader"),
        bool32("tessellationShader"),
        bool32("sampleRateShading"),
        bool32("dualSrcBlend"),
        bool32("logicOp"),
        bool32("multiDrawIndirect"),
        bool32("drawIndirectFirstInstance"),
        bool32("depthClamp"),
        bool32("depthBiasClamp"),
        bool32("fillModeNonSolid"),
        bool32("depthBounds"),
        bool32("wideLines"),
        bool32("largePoints"),
        bool32("alphaToOne"),
        bool32("multiViewport"),
        bool32("samplerAnisotropy"),
        bool32("textureCompressionETC2"),
        bool32("textureCompressionASTC_LDR"),
        bool32("textureCompressionBC"),
        bool32("occlusionQueryPrecise"),
        bool32("pipelineStatisticsQuery"),
        bool32("vertexPipelineStoresAndAtomics"),
        bool32("fragmentStoresAndAtomics"),
        bool32("shaderTessellationAndGeometryPointSize"),
        bool32("shaderImageGatherExtended"),
        bool32("shaderStorageImageExtendedFormats"),
        bool32("shaderStorageImageMultisample"),
        bool32("shaderStorageImageReadWithoutFormat"),
        bool32("shaderStorageImageWriteWithoutFormat"),
        bool32("shaderUniformBufferArrayDynamicIndexing"),
        bool32("shaderSampledImageArrayDynamicIndexing"),
        bool32("shaderStorageBufferArrayDynamicIndexing"),
        bool32("shaderStorageImageArrayDynamicIndexing"),
        bool32("shaderClipDistance"),
        bool32("shaderCullDistance"),
        bool32("shaderFloat64"),
        bool32("shaderInt64"),
        bool32("shaderInt16"),
        bool32("shaderResourceResidency"),
        bool32("shaderResourceMinLod"),
        bool32("sparseBinding"),
        bool32("sparseResidencyBuffer"),
        bool32("sparseResidencyImage2D"),
        bool32("sparseResidencyImage3D"),
        bool32("sparseResidency2Samples"),
        bool32("sparseResidency4Samples"),
        bool32("sparseResidency8Samples"),
        bool32("sparseResidency16Samples"),
        bool32("sparseResidencyAliased"),
        bool32("variableMultisampleRate"),
        bool32("inheritedQueries"),
    ],
};

pub static DEVICE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkDeviceCreateInfo",
    s_type: Some(3),
    fields: &[
        F::u32("flags"),
        F::u32("queueCreateInfoCount"),
        F::structure("pQueueCreateInfos", &DEVICE_QUEUE_CREATE_INFO)
            .counted_by("queueCreateInfoCount"),
        F::u32("enabledLayerCount"),
        name_list("ppEnabledLayerNames", "enabledLayerCount"),
        F::u32("enabledExtensionCount"),
        name_list("ppEnabledExtensionNames", "enabledExtensionCount"),
        F::structure("pEnabledFeatures", &PHYSICAL_DEVICE_FEATURES).optional(),
    ],
};

pub static SUBMIT_INFO: StructSchema = StructSchema {
    name: "VkSubmitInfo",
    s_type: Some(4),
    fields: &[
        F::u32("waitSemaphoreCount"),
        F::handle("pWaitSemaphores", H::Semaphore).counted_by("waitSemaphoreCount"),
        F::flags("pWaitDstStageMask", &PIPELINE_STAGE).counted_by("waitSemaphoreCount"),
        F::u32("commandBufferCount"),
        F::handle("pCommandBuffers", H::CommandBuffer).counted_by("commandBufferCount"),
        F::u32("signalSemaphoreCount"),
        F::handle("pSignalSemaphores", H::Semaphore).counted_by("signalSemaphoreCount"),
    ],
};

pub static MEMORY_ALLOCATE_INFO: StructSchema = StructSchema {
    name: "VkMemoryAllocateInfo",
    s_type: Some(5),
    fields: &[F::u64("allocationSize"), F::u32("memoryTypeIndex")],
};

pub static MAPPED_MEMORY_RANGE: StructSchema = StructSchema {
    name: "VkMappedMemoryRange",
    s_type: Some(6),
    fields: &[
        F::handle("memory", H::DeviceMemory),
        F::u64("offset"),
        F::u64("size"),
    ],
};

pub static FORMAT_PROPERTIES: StructSchema = StructSchema {
    name: "VkFormatProperties",
    s_type: None,
    fields: &[
        F::flags("linearTilingFeatures", &FORMAT_FEATURE),
        F::flags("optimalTilingFeatures", &FORMAT_FEATURE),
        F::flags("bufferFeatures", &FORMAT_FEATURE),
    ],
};

pub static MEMORY_REQUIREMENTS: StructSchema = StructSchema {
    name: "VkMemoryRequirements",
    s_type: None,
    fields: &[
        F::u64("size"),
        F::u64("alignment"),
        F::u32("memoryTypeBits"),
    ],
};

pub static FENCE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkFenceCreateInfo",
    s_type: Some(8),
    fields: &[F::flags("flags", &FENCE_CREATE)],
};

pub static SEMAPHORE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkSemaphoreCreateInfo",
    s_type: Some(9),
    fields: &[F::u32("flags")],
};

pub static BUFFER_CREATE_INFO: StructSchema = StructSchema {
    name: "VkBufferCreateInfo",
    s_type: Some(12),
    fields: &[
        F::u32("flags"),
        F::u64("size"),
        F::flags("usage", &BUFFER_USAGE),
        F::enumeration("sharingMode", &SHARING_MODE),
        F::u32("queueFamilyIndexCount"),
        F::u32("pQueueFamilyIndices")
            .optional()
            .counted_by("queueFamilyIndexCount"),
    ],
};

pub static EXTENT_2D: StructSchema = StructSchema {
    name: "VkExtent2D",
    s_type: None,
    fields: &[F::u32("width"), F::u32("height")],
};

pub static EXTENT_3D: StructSchema = StructSchema {
    name: "VkExtent3D",
    s_type: None,
    fields: &[F::u32("width"), F::u32("height"), F::u32("depth")],
};

pub static OFFSET_2D: StructSchema = StructSchema {
    name: "VkOffset2D",
    s_type: None,
    fields: &[F::int("x", IntSpec::I32), F::int("y", IntSpec::I32)],
};

pub static OFFSET_3D: StructSchema = StructSchema {
    name: "VkOffset3D",
    s_type: None,
    fields: &[
        F::int("x", IntSpec::I32),
        F::int("y", IntSpec::I32),
        F::int("z", IntSpec::I32),
    ],
};

pub static RECT_2D: StructSchema = StructSchema {
    name: "VkRect2D",
    s_type: None,
    fields: &[
        F::structure("offset", &OFFSET_2D),
        F::structure("extent", &EXTENT_2D),
    ],
};

pub static IMAGE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkImageCreateInfo",
    s_type: Some(14),
    fields: &[
        F::u32("flags"),
        F::enumeration("imageType", &IMAGE_TYPE),
        F::enumeration("format", &FORMAT),
        F::structure("extent", &EXTENT_3D),
        F::u32("mipLevels"),
        F::u32("arrayLayers"),
        F::flags("samples", &SAMPLE_COUNT),
        F::enumeration("tiling", &IMAGE_TILING),
        F::flags("usage", &IMAGE_USAGE),
        F::enumeration("sharingMode", &SHARING_MODE),
        F::u32("queueFamilyIndexCount"),
        F::u32("pQueueFamilyIndices")
            .optional()
            .counted_by("queueFamilyIndexCount"),
        F::enumeration("initialLayout", &IMAGE_LAYOUT),
    ],
};

pub static COMPONENT_MAPPING: StructSchema = StructSchema {
    name: "VkComponentMapping",
    s_type: None,
    fields: &[
        F::enumeration("r", &COMPONENT_SWIZZLE),
        F::enumeration("g", &COMPONENT_SWIZZLE),
        F::enumeration("b", &COMPONENT_SWIZZLE),
        F::enumeration("a", &COMPONENT_SWIZZLE),
    ],
};

pub static IMAGE_SUBRESOURCE_RANGE: StructSchema = StructSchema {
    name: "VkImageSubresourceRange",
    s_type: None,
    fields: &[
        F::flags("aspectMask", &IMAGE_ASPECT),
        F::u32("baseMipLevel"),
        F::u32("levelCount"),
        F::u32("baseArrayLayer"),
        F::u32("layerCount"),
    ],
};

pub static IMAGE_SUBRESOURCE_LAYERS: StructSchema = StructSchema {
    name: "VkImageSubresourceLayers",
    s_type: None,
    fields: &[
        F::flags("aspectMask", &IMAGE_ASPECT),
        F::u32("mipLevel"),
        F::u32("baseArrayLayer"),
        F::u32("layerCount"),
    ],
};

pub static IMAGE_VIEW_CREATE_INFO: StructSchema = StructSchema {
    name: "VkImageViewCreateInfo",
    s_type: Some(15),
    fields: &[
        F::u32("flags"),
        F::handle("image", H::Image),
        F::enumeration("viewType", &IMAGE_VIEW_TYPE),
        F::enumeration("format", &FORMAT),
        F::structure("components", &COMPONENT_MAPPING),
        F::structure("subresourceRange", &IMAGE_SUBRESOURCE_RANGE),
    ],
};

pub static SHADER_MODULE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkShaderModuleCreateInfo",
    s_type: Some(16),
    fields: &[
        F::u32("flags"),
        size("codeSize"),
        F::u32("pCode").counted_by_div("codeSize", 4),
    ],
};

pub static PIPELINE_CACHE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineCacheCreateInfo",
    s_type: Some(17),
    fields: &[
        F::u32("flags"),
        size("initialDataSize"),
        bytes("pInitialData").counted_by("initialDataSize"),
    ],
};

pub static SPECIALIZATION_MAP_ENTRY: StructSchema = StructSchema {
    name: "VkSpecializationMapEntry",
    s_type: None,
    fields: &[F::u32("constantID"), F::u32("offset"), size("size")],
};

pub static SPECIALIZATION_INFO: StructSchema = StructSchema {
    name: "VkSpecializationInfo",
    s_type: None,
    fields: &[
        F::u32("mapEntryCount"),
        F::structure("pMapEntries", &SPECIALIZATION_MAP_ENTRY).counted_by("mapEntryCount"),
        size("dataSize"),
        bytes("pData").counted_by("dataSize"),
    ],
};

pub static PIPELINE_SHADER_STAGE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineShaderStageCreateInfo",
    s_type: Some(18),
    fields: &[
        F::u32("flags"),
        F::flags("stage", &SHADER_STAGE),
        F::handle("module", H::ShaderModule),
        F::string("pName", StringEncoding::LengthPrefixed),
        F::structure("pSpecializationInfo", &SPECIALIZATION_INFO).optional(),
    ],
};

pub static VERTEX_INPUT_BINDING_DESCRIPTION: StructSchema = StructSchema {
    name: "VkVertexInputBindingDescription",
    s_type: None,
    fields: &[
        F::u32("binding"),
        F::u32("stride"),
        F::enumeration("inputRate", &VERTEX_INPUT_RATE),
    ],
};

pub static VERTEX_INPUT_ATTRIBUTE_DESCRIPTION: StructSchema = StructSchema {
    name: "VkVertexInputAttributeDescription",
    s_type: None,
    fields: &[
        F::u32("location"),
        F::u32("binding"),
        F::enumeration("format", &FORMAT),
        F::u32("offset"),
    ],
};

pub static PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineVertexInputStateCreateInfo",
    s_type: Some(19),
    fields: &[
        F::u32("flags"),
        F::u32("vertexBindingDescriptionCount"),
        F::structure(
            "pVertexBindingDescriptions",
            &VERTEX_INPUT_BINDING_DESCRIPTION,
        )
        .counted_by("vertexBindingDescriptionCount"),
        F::u32("vertexAttributeDescriptionCount"),
        F::structure(
            "pVertexAttributeDescriptions",
            &VERTEX_INPUT_ATTRIBUTE_DESCRIPTION,
        )
        .counted_by("vertexAttributeDescriptionCount"),
    ],
};

pub static PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineInputAssemblyStateCreateInfo",
    s_type: Some(20),
    fields: &[
        F::u32("flags"),
        F::enumeration("topology", &PRIMITIVE_TOPOLOGY),
        bool32("primitiveRestartEnable"),
    ],
};

pub static PIPELINE_TESSELLATION_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineTessellationStateCreateInfo",
    s_type: Some(21),
    fields: &[F::u32("flags"), F::u32("patchControlPoints")],
};

pub static VIEWPORT: StructSchema = StructSchema {
    name: "VkViewport",
    s_type: None,
    fields: &[
        F::f32("x"),
        F::f32("y"),
        F::f32("width"),
        F::f32("height"),
        F::f32("minDepth"),
        F::f32("maxDepth"),
    ],
};

pub static PIPELINE_VIEWPORT_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineViewportStateCreateInfo",
    s_type: Some(22),
    fields: &[
        F::u32("flags"),
        F::u32("viewportCount"),
        F::structure("pViewports", &VIEWPORT)
            .optional()
            .counted_by("viewportCount"),
        F::u32("scissorCount"),
        F::structure("pScissors", &RECT_2D)
            .optional()
            .counted_by("scissorCount"),
    ],
};

pub static PIPELINE_RASTERIZATION_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineRasterizationStateCreateInfo",
    s_type: Some(23),
    fields: &[
        F::u32("flags"),
        bool32("depthClampEnable"),
        bool32("rasterizerDiscardEnable"),
        F::enumeration("polygonMode", &POLYGON_MODE),
        F::flags("cullMode", &CULL_MODE),
        F::enumeration("frontFace", &FRONT_FACE),
        bool32("depthBiasEnable"),
        F::f32("depthBiasConstantFactor"),
        F::f32("depthBiasClamp"),
        F::f32("depthBiasSlopeFactor"),
        F::f32("lineWidth"),
    ],
};

pub static PIPELINE_MULTISAMPLE_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineMultisampleStateCreateInfo",
    s_type: Some(24),
    fields: &[
        F::u32("flags"),
        F::flags("rasterizationSamples", &SAMPLE_COUNT),
        bool32("sampleShadingEnable"),
        F::f32("minSampleShading"),
        F::u32("pSampleMask")
            .optional()
            .counted_by_div("rasterizationSamples", 32),
        bool32("alphaToCoverageEnable"),
        bool32("alphaToOneEnable"),
    ],
};

pub static STENCIL_OP_STATE: StructSchema = StructSchema {
    name: "VkStencilOpState",
    s_type: None,
    fields: &[
        F::enumeration("failOp", &STENCIL_OP),
        F::enumeration("passOp", &STENCIL_OP),
        F::enumeration("depthFailOp", &STENCIL_OP),
        F::enumeration("compareOp", &COMPARE_OP),
        F::u32("compareMask"),
        F::u32("writeMask"),
        F::u32("reference"),
    ],
};

pub static PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineDepthStencilStateCreateInfo",
    s_type: Some(25),
    fields: &[
        F::u32("flags"),
        bool32("depthTestEnable"),
        bool32("depthWriteEnable"),
        F::enumeration("depthCompareOp", &COMPARE_OP),
        bool32("depthBoundsTestEnable"),
        bool32("stencilTestEnable"),
        F::structure("front", &STENCIL_OP_STATE),
        F::structure("back", &STENCIL_OP_STATE),
        F::f32("minDepthBounds"),
        F::f32("maxDepthBounds"),
    ],
};

pub static PIPELINE_COLOR_BLEND_ATTACHMENT_STATE: StructSchema = StructSchema {
    name: "VkPipelineColorBlendAttachmentState",
    s_type: None,
    fields: &[
        bool32("blendEnable"),
        F::enumeration("srcColorBlendFactor", &BLEND_FACTOR),
        F::enumeration("dstColorBlendFactor", &BLEND_FACTOR),
        F::enumeration("colorBlendOp", &BLEND_OP),
        F::enumeration("srcAlphaBlendFactor", &BLEND_FACTOR),
        F::enumeration("dstAlphaBlendFactor", &BLEND_FACTOR),
        F::enumeration("alphaBlendOp", &BLEND_OP),
        F::flags("colorWriteMask", &COLOR_COMPONENT),
    ],
};

pub static PIPELINE_COLOR_BLEND_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineColorBlendStateCreateInfo",
    s_type: Some(26),
    fields: &[
        F::u32("flags"),
        bool32("logicOpEnable"),
        F::enumeration("logicOp", &LOGIC_OP),
        F::u32("attachmentCount"),
        F::structure("pAttachments", &PIPELINE_COLOR_BLEND_ATTACHMENT_STATE)
            .counted_by("attachmentCount"),
        F::f32("blendConstants").fixed(4),
    ],
};

pub static PIPELINE_DYNAMIC_STATE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineDynamicStateCreateInfo",
    s_type: Some(27),
    fields: &[
        F::u32("flags"),
        F::u32("dynamicStateCount"),
        F::enumeration("pDynamicStates", &DYNAMIC_STATE).counted_by("dynamicStateCount"),
    ],
};

pub static GRAPHICS_PIPELINE_CREATE_INFO: StructSchema = StructSchema {
    name: "VkGraphicsPipelineCreateInfo",
    s_type: Some(28),
    fields: &[
        F::u32("flags"),
        F::u32("stageCount"),
        F::structure("pStages", &PIPELINE_SHADER_STAGE_CREATE_INFO).counted_by("stageCount"),
        F::structure("pVertexInputState", &PIPELINE_VERTEX_INPUT_STATE_CREATE_INFO).optional(),
        F::structure(
            "pInputAssemblyState",
            &PIPELINE_INPUT_ASSEMBLY_STATE_CREATE_INFO,
        )
        .optional(),
        F::structure(
            "pTessellationState",
            &PIPELINE_TESSELLATION_STATE_CREATE_INFO,
        )
        .optional(),
        F::structure("pViewportState", &PIPELINE_VIEWPORT_STATE_CREATE_INFO).optional(),
        F::structure(
            "pRasterizationState",
            &PIPELINE_RASTERIZATION_STATE_CREATE_INFO,
        )
        .optional(),
        F::structure("pMultisampleState", &PIPELINE_MULTISAMPLE_STATE_CREATE_INFO).optional(),
        F::structure(
            "pDepthStencilState",
            &PIPELINE_DEPTH_STENCIL_STATE_CREATE_INFO,
        )
        .optional(),
        F::structure("pColorBlendState", &PIPELINE_COLOR_BLEND_STATE_CREATE_INFO).optional(),
        F::structure("pDynamicState", &PIPELINE_DYNAMIC_STATE_CREATE_INFO).optional(),
        F::handle("layout", H::PipelineLayout),
        F::handle("renderPass", H::RenderPass),
        F::u32("subpass"),
        F::handle("basePipelineHandle", H::Pipeline),
        F::int("basePipelineIndex", IntSpec::I32),
    ],
};

pub static PUSH_CONSTANT_RANGE: StructSchema = StructSchema {
    name: "VkPushConstantRange",
    s_type: None,
    fields: &[
        F::flags("stageFlags", &SHADER_STAGE),
        F::u32("offset"),
        F::u32("size"),
    ],
};

pub static PIPELINE_LAYOUT_CREATE_INFO: StructSchema = StructSchema {
    name: "VkPipelineLayoutCreateInfo",
    s_type: Some(30),
    fields: &[
        F::u32("flags"),
        F::u32("setLayoutCount"),
        F::handle("pSetLayouts", H::DescriptorSetLayout).counted_by("setLayoutCount"),
        F::u32("pushConstantRangeCount"),
        F::structure("pPushConstantRanges", &PUSH_CONSTANT_RANGE)
            .counted_by("pushConstantRangeCount"),
    ],
};

pub static SAMPLER_CREATE_INFO: StructSchema = StructSchema {
    name: "VkSamplerCreateInfo",
    s_type: Some(31),
    fields: &[
        F::u32("flags"),
        F::enumeration("magFilter", &FILTER),
        F::enumeration("minFilter", &FILTER),
        F::enumeration("mipmapMode", &SAMPLER_MIPMAP_MODE),
        F::enumeration("addressModeU", &SAMPLER_ADDRESS_MODE),
        F::enumeration("addressModeV", &SAMPLER_ADDRESS_MODE),
        F::enumeration("addressModeW", &SAMPLER_ADDRESS_MODE),
        F::f32("mipLodBias"),
        bool32("anisotropyEnable"),
        F::f32("maxAnisotropy"),
        bool32("compareEnable"),
        F::enumeration("compareOp", &COMPARE_OP),
        F::f32("minLod"),
        F::f32("maxLod"),
        F::enumeration("borderColor", &BORDER_COLOR),
        bool32("unnormalizedCoordinates"),
    ],
};

pub static DESCRIPTOR_SET_LAYOUT_BINDING: StructSchema = StructSchema {
    name: "VkDescriptorSetLayoutBinding",
    s_type: None,
    fields: &[
        F::u32("binding"),
        F::enumeration("descriptorType", &DESCRIPTOR_TYPE),
        F::u32("descriptorCount"),
        F::flags("stageFlags", &SHADER_STAGE),
        F::handle("pImmutableSamplers", H::Sampler)
            .optional()
            .counted_by("descriptorCount"),
    ],
};

pub static DESCRIPTOR_SET_LAYOUT_CREATE_INFO: StructSchema = StructSchema {
    name: "VkDescriptorSetLayoutCreateInfo",
    s_type: Some(32),
    fields: &[
        F::u32("flags"),
        F::u32("bindingCount"),
        F::structure("pBindings", &DESCRIPTOR_SET_LAYOUT_BINDING).counted_by("bindingCount"),
    ],
};

pub static DESCRIPTOR_POOL_SIZE: StructSchema = StructSchema {
    name: "VkDescriptorPoolSize",
    s_type: None,
    fields: &[
        F::enumeration("type", &DESCRIPTOR_TYPE),
        F::u32("descriptorCount"),
    ],
};

pub static DESCRIPTOR_POOL_CREATE_INFO: StructSchema = StructSchema {
    name: "VkDescriptorPoolCreateInfo",
    s_type: Some(33),
    fields: &[
        F::flags("flags", &DESCRIPTOR_POOL_CREATE),
        F::u32("maxSets"),
        F::u32("poolSizeCount"),
        F::structure("pPoolSizes", &DESCRIPTOR_POOL_SIZE).counted_by("poolSizeCount"),
    ],
};

pub static DESCRIPTOR_SET_ALLOCATE_INFO: StructSchema = StructSchema {
    name: "VkDescriptorSetAllocateInfo",
    s_type: Some(34),
    fields: &[
        F::handle("descriptorPool", H::DescriptorPool),
        F::u32("descriptorSetCount"),
        F::handle("pSetLayouts", H::DescriptorSetLayout).counted_by("descriptorSetCount"),
    ],
};

pub static DESCRIPTOR_IMAGE_INFO: StructSchema = StructSchema {
    name: "VkDescriptorImageInfo",
    s_type: None,
    fields: &[
        F::handle("sampler", H::Sampler),
        F::handle("imageView", H::ImageView),
        F::enumeration("imageLayout", &IMAGE_LAYOUT),
    ],
};

pub static DESCRIPTOR_BUFFER_INFO: StructSchema = StructSchema {
    name: "VkDescriptorBufferInfo",
    s_type: None,
    fields: &[
        F::handle("buffer", H::Buffer),
        F::u64("offset"),
        F::u64("range"),
    ],
};

pub static WRITE_DESCRIPTOR_SET: StructSchema = StructSchema {
    name: "VkWriteDescriptorSet",
    s_type: Some(35),
    fields: &[
        F::handle("dstSet", H::DescriptorSet),
        F::u32("dstBinding"),
        F::u32("dstArrayElement"),
        F::u32("descriptorCount"),
        F::enumeration("descriptorType", &DESCRIPTOR_TYPE),
        F::structure("pImageInfo", &DESCRIPTOR_IMAGE_INFO)
            .optional()
            .counted_by("descriptorCount"),
        F::structure("pBufferInfo", &DESCRIPTOR_BUFFER_INFO)
            .optional()
            .counted_by("descriptorCount"),
        F::handle("pTexelBufferView", H::BufferView)
            .optional()
            .counted_by("descriptorCount"),
    ],
};

pub static COPY_DESCRIPTOR_SET: StructSchema = StructSchema {
    name: "VkCopyDescriptorSet",
    s_type: Some(36),
    fields: &[
        F::handle("srcSet", H::DescriptorSet),
        F::u32("srcBinding"),
        F::u32("srcArrayElement"),
        F::handle("dstSet", H::DescriptorSet),
        F::u32("dstBinding"),
        F::u32("dstArrayElement"),
        F::u32("descriptorCount"),
    ],
};

pub static FRAMEBUFFER_CREATE_INFO: StructSchema = StructSchema {
    name: "VkFramebufferCreateInfo",
    s_type: Some(37),
    fields: &[
        F::u32("flags"),
        F::handle("renderPass", H::RenderPass),
        F::u32("attachmentCount"),
        F::handle("pAttachments", H::ImageView).counted_by("attachmentCount"),
        F::u32("width"),
        F::u32("height"),
        F::u32("layers"),
    ],
};

pub static ATTACHMENT_DESCRIPTION: StructSchema = StructSchema {
    name: "VkAttachmentDescription",
    s_type: None,
    fields: &[
        F::u32("flags"),
        F::enumeration("format", &FORMAT),
        F::flags("samples", &SAMPLE_COUNT),
        F::enumeration("loadOp", &ATTACHMENT_LOAD_OP),
        F::enumeration("storeOp", &ATTACHMENT_STORE_OP),
        F::enumeration("stencilLoadOp", &ATTACHMENT_LOAD_OP),
        F::enumeration("stencilStoreOp", &ATTACHMENT_STORE_OP),
        F::enumeration("initialLayout", &IMAGE_LAYOUT),
        F::enumeration("finalLayout", &IMAGE_LAYOUT),
    ],
};

pub static ATTACHMENT_REFERENCE: StructSchema = StructSchema {
    name: "VkAttachmentReference",
    s_type: None,
    fields: &[
        F::u32("attachment"),
        F::enumeration("layout", &IMAGE_LAYOUT),
    ],
};

pub static SUBPASS_DESCRIPTION: StructSchema = StructSchema {
    name: "VkSubpassDescription",
    s_type: None,
    fields: &[
        F::u32("flags"),
        F::enumeration("pipelineBindPoint", &PIPELINE_BIND_POINT),
        F::u32("inputAttachmentCount"),
        F::structure("pInputAttachments", &ATTACHMENT_REFERENCE)
            .counted_by("inputAttachmentCount"),
        F::u32("colorAttachmentCount"),
        F::structure("pColorAttachments", &ATTACHMENT_REFERENCE)
            .counted_by("colorAttachmentCount"),
        F::structure("pResolveAttachments", &ATTACHMENT_REFERENCE)
            .optional()
            .counted_by("colorAttachmentCount"),
        F::structure("pDepthStencilAttachment", &ATTACHMENT_REFERENCE).optional(),
        F::u32("preserveAttachmentCount"),
        F::u32("pPreserveAttachments").counted_by("preserveAttachmentCount"),
    ],
};

pub static SUBPASS_DEPENDENCY: StructSchema = StructSchema {
    name: "VkSubpassDependency",
    s_type: None,
    fields: &[
        F::u32("srcSubpass"),
        F::u32("dstSubpass"),
        F::flags("srcStageMask", &PIPELINE_STAGE),
        F::flags("dstStageMask", &PIPELINE_STAGE),
        F::flags("srcAccessMask", &ACCESS),
        F::flags("dstAccessMask", &ACCESS),
        F::flags("dependencyFlags", &DEPENDENCY),
    ],
};

pub static RENDER_PASS_CREATE_INFO: StructSchema = StructSchema {
    name: "VkRenderPassCreateInfo",
    s_type: Some(38),
    fields: &[
        F::u32("flags"),
        F::u32("attachmentCount"),
        F::structure("pAttachments", &ATTACHMENT_DESCRIPTION).counted_by("attachmentCount"),
        F::u32("subpassCount"),
        F::structure("pSubpasses", &SUBPASS_DESCRIPTION).counted_by("subpassCount"),
        F::u32("dependencyCount"),
        F::structure("pDependencies", &SUBPASS_DEPENDENCY).counted_by("dependencyCount"),
    ],
};

pub static COMMAND_POOL_CREATE_INFO: StructSchema = StructSchema {
    name: "VkCommandPoolCreateInfo",
    s_type: Some(39),
    fields: &[
        F::flags("flags", &COMMAND_POOL_CREATE),
        F::u32("queueFamilyIndex"),
    ],
};

pub static COMMAND_BUFFER_ALLOCATE_INFO: StructSchema = StructSchema {
    name: "VkCommandBufferAllocateInfo",
    s_type: Some(40),
    fields: &[
        F::handle("commandPool", H::CommandPool),
        F::enumeration("level", &COMMAND_BUFFER_LEVEL),
        F::u32("commandBufferCount"),
    ],
};

pub static COMMAND_BUFFER_INHERITANCE_INFO: StructSchema = StructSchema {
    name: "VkCommandBufferInheritanceInfo",
    s_type: Some(41),
    fields: &[
        F::handle("renderPass", H::RenderPass),
        F::u32("subpass"),
        F::handle("framebuffer", H::Framebuffer),
        bool32("occlusionQueryEnable"),
        F::u32("queryFlags"),
        F::u32("pipelineStatistics"),
    ],
};

pub static COMMAND_BUFFER_BEGIN_INFO: StructSchema = StructSchema {
    name: "VkCommandBufferBeginInfo",
    s_type: Some(42),
    fields: &[
        F::flags("flags", &COMMAND_BUFFER_USAGE),
        F::structure("pInheritanceInfo", &COMMAND_BUFFER_INHERITANCE_INFO).optional(),
    ],
};

pub static CLEAR_COLOR_VALUE: StructSchema = StructSchema {
    name: "VkClearColorValue",
    s_type: None,
    fields: &[F::f32("float32").fixed(4)],
};

pub static CLEAR_VALUE: StructSchema = StructSchema {
    name: "VkClearValue",
    s_type: None,
    fields: &[F::structure("color", &CLEAR_COLOR_VALUE)],
};

pub static RENDER_PASS_BEGIN_INFO: StructSchema = StructSchema {
    name: "VkRenderPassBeginInfo",
    s_type: Some(43),
    fields: &[
        F::handle("renderPass", H::RenderPass),
        F::handle("framebuffer", H::Framebuffer),
        F::structure("renderArea", &RECT_2D),
        F::u32("clearValueCount"),
        F::structure("pClearValues", &CLEAR_VALUE)
            .optional()
            .counted_by("clearValueCount"),
    ],
};

pub static BUFFER_MEMORY_BARRIER: StructSchema = StructSchema {
    name: "VkBufferMemoryBarrier",
    s_type: Some(44),
    fields: &[
        F::flags("srcAccessMask", &ACCESS),
        F::flags("dstAccessMask", &ACCESS),
        F::u32("srcQueueFamilyIndex"),
        F::u32("dstQueueFamilyIndex"),
        F::handle("buffer", H::Buffer),
        F::u64("offset"),
        F::u64("size"),
    ],
};

pub static IMAGE_MEMORY_BARRIER: StructSchema = StructSchema {
    name: "VkImageMemoryBarrier",
    s_type: Some(45),
    fields: &[
        F::flags("srcAccessMask", &ACCESS),
        F::flags("dstAccessMask", &ACCESS),
        F::enumeration("oldLayout", &IMAGE_LAYOUT),
        F::enumeration("newLayout", &IMAGE_LAYOUT),
        F::u32("srcQueueFamilyIndex"),
        F::u32("dstQueueFamilyIndex"),
        F::handle("image", H::Image),
        F::structure("subresourceRange", &IMAGE_SUBRESOURCE_RANGE),
    ],
};

pub static MEMORY_BARRIER: StructSchema = StructSchema {
    name: "VkMemoryBarrier",
    s_type: Some(46),
    fields: &[
        F::flags("srcAccessMask", &ACCESS),
        F::flags("dstAccessMask", &ACCESS),
    ],
};

pub static BUFFER_IMAGE_COPY: StructSchema = StructSchema {
    name: "VkBufferImageCopy",
    s_type: None,
    fields: &[
        F::u64("bufferOffset"),
        F::u32("bufferRowLength"),
        F::u32("bufferImageHeight"),
        F::structure("imageSubresource", &IMAGE_SUBRESOURCE_LAYERS),
        F::structure("imageOffset", &OFFSET_3D),
        F::structure("imageExtent", &EXTENT_3D),
    ],
};

pub static CLEAR_ATTACHMENT: StructSchema = StructSchema {
    name: "VkClearAttachment",
    s_type: None,
    fields: &[
        F::flags("aspectMask", &IMAGE_ASPECT),
        F::u32("colorAttachment"),
        F::structure("clearValue", &CLEAR_VALUE),
    ],
};

pub static CLEAR_RECT: StructSchema = StructSchema {
    name: "VkClearRect",
    s_type: None,
    fields: &[
        F::structure("rect", &RECT_2D),
        F::u32("baseArrayLayer"),
        F::u32("layerCount"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::names::STRUCTURE_TYPE;

    #[test]
    fn structure_tags_match_their_names() {
        for schema in [
            &INSTANCE_CREATE_INFO,
            &DEVICE_CREATE_INFO,
            &BUFFER_CREATE_INFO,
            &IMAGE_CREATE_INFO,
            &GRAPHICS_PIPELINE_CREATE_INFO,
            &PIPELINE_LAYOUT_CREATE_INFO,
            &WRITE_DESCRIPTOR_SET,
            &COMMAND_BUFFER_BEGIN_INFO,
            &RENDER_PASS_BEGIN_INFO,
            &MEMORY_BARRIER,
        ] {
            let tag = schema.s_type.unwrap();
            let label = STRUCTURE_TYPE.label(tag).unwrap();
            let mut expected = String::from("VK_STRUCTURE_TYPE");
            for c in schema.name.trim_start_matches("Vk").chars() {
                if c.is_ascii_uppercase() {
                    expected.push('_');
                }
                expected.push(c.to_ascii_uppercase());
            }
            assert_eq!(label, expected, "{}", schema.name);
        }
    }

    #[test]
    fn feature_struct_lists_every_core_feature() {
        assert_eq!(PHYSICAL_DEVICE_FEATURES.fields.len(), 55);
    }
}
